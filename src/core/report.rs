use crate::core::enumerator::write_primes_below;
use crate::domain::model::Candidate;
use crate::utils::error::Result;
use std::io::Write;

/// The full program output for one bound: a header line and the primes below it.
#[derive(Debug, Clone)]
pub struct PrimeReport {
    bound: Candidate,
    header: bool,
}

impl PrimeReport {
    pub fn new(bound: Candidate) -> Self {
        Self {
            bound,
            header: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn header_line(&self) -> String {
        format!(
            "Here is a list of all prime numbers smaller than {}:",
            self.bound
        )
    }

    /// Writes the report and returns the number of primes listed.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::debug!("Listing primes below {}", self.bound);

        if self.header {
            writeln!(out, "{}", self.header_line())?;
        }

        let count = write_primes_below(self.bound, out)?;
        out.flush()?;

        tracing::debug!("Listed {} primes below {}", count, self.bound);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &PrimeReport) -> String {
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_for_fifteen() {
        let text = render(&PrimeReport::new(15));
        assert_eq!(
            text,
            "Here is a list of all prime numbers smaller than 15:\n13\n11\n7\n5\n3\n2\n"
        );
    }

    #[test]
    fn test_report_header_only_for_one() {
        let text = render(&PrimeReport::new(1));
        assert_eq!(text, "Here is a list of all prime numbers smaller than 1:\n");
    }

    #[test]
    fn test_report_echoes_negative_bound() {
        let report = PrimeReport::new(-4);
        assert_eq!(
            report.header_line(),
            "Here is a list of all prime numbers smaller than -4:"
        );
        assert_eq!(render(&report).lines().count(), 1);
    }

    #[test]
    fn test_report_without_header() {
        let report = PrimeReport::new(10).with_header(false);
        assert_eq!(render(&report), "7\n5\n3\n2\n");
    }

    #[test]
    fn test_report_counts_primes() {
        let mut sink = std::io::sink();
        assert_eq!(PrimeReport::new(100).write_to(&mut sink).unwrap(), 25);
    }
}
