/// An integer under primality evaluation.
///
/// Signed so that zero and negative bounds parse and flow through the
/// enumeration instead of being rejected at the boundary.
pub type Candidate = i64;
