//! SCC scores emitted by hicrep, one per line, and their summary.

use crate::libs::error::{Error, Result};

/// Best-effort line-wise parse of raw hicrep output.
///
/// Every line that reads as a finite number becomes a score, in order of
/// appearance. Headers, warnings and blank lines are dropped.
///
/// ```
/// let scores = vshicrep::libs::scc::extract("1.0\n2.0\nfoo\n3.0\n");
/// assert_eq!(scores, vec![1.0, 2.0, 3.0]);
///
/// assert!(vshicrep::libs::scc::extract("").is_empty());
/// ```
pub fn extract(text: &str) -> Vec<f64> {
    text.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<f64> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Arithmetic mean of the scores.
///
/// The sum is compensated (Neumaier) and the division carries the residual of
/// the quotient, so the result is the correctly rounded mean for all but
/// pathological inputs. A sum that overflows is redone on scores scaled by
/// `1 / n`.
///
/// ```
/// use vshicrep::libs::scc::summarize;
///
/// assert_eq!(summarize(&[0.5, 0.7, 0.9]).unwrap(), 0.7);
/// assert_eq!(summarize(&[1e308, 1e308]).unwrap(), 1e308);
/// assert!(summarize(&[]).is_err());
/// ```
pub fn summarize(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(Error::EmptyInput);
    }

    let n = scores.len() as f64;
    let (sum, comp) = neumaier(scores.iter().copied());
    if !sum.is_finite() || !comp.is_finite() {
        let (sum, comp) = neumaier(scores.iter().map(|x| x / n));
        return Ok(sum + comp);
    }

    let q = sum / n;
    // exact remainder of sum - q * n
    let r = (-q).mul_add(n, sum);

    Ok(q + (r + comp) / n)
}

// running sum and its compensation
fn neumaier(xs: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut sum = 0.0f64;
    let mut comp = 0.0f64;
    for x in xs {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    }
    (sum, comp)
}

/// A single score, always with a fractional part
///
/// ```
/// use vshicrep::libs::scc::format_score;
///
/// assert_eq!(format_score(2.0), "2.0");
/// assert_eq!(format_score(0.7), "0.7");
/// assert_eq!(format_score(-0.25), "-0.25");
/// ```
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

/// A list of scores, `[0.9, 0.8]`
pub fn format_scores(scores: &[f64]) -> String {
    let body = scores
        .iter()
        .map(|s| format_score(*s))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extract_skips_non_numeric() {
        let text = "\
# hicrep SCC scores
# binSize 500000
0.9812
chr2 skipped: empty matrix
-0.0150

1e-3
  0.5\t
";
        assert_eq!(extract(text), vec![0.9812, -0.015, 0.001, 0.5]);
    }

    #[test]
    fn extract_preserves_order_and_duplicates() {
        assert_eq!(extract("3\n1\n3\n2"), vec![3.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn extract_crlf() {
        assert_eq!(extract("0.25\r\n0.75\r\n"), vec![0.25, 0.75]);
    }

    #[test]
    fn extract_literal_forms() {
        assert_eq!(
            extract("+1.5\n.5\n5.\n-2E2\n1e+2\n"),
            vec![1.5, 0.5, 5.0, -200.0, 100.0]
        );
    }

    #[test]
    fn extract_rejects_non_finite_and_partial() {
        assert!(extract("nan\ninf\n-infinity\nNaN\n").is_empty());
        assert!(extract("1.0 2.0\n0.5x\n1,5\n").is_empty());
    }

    #[test]
    fn extract_whitespace_only() {
        assert!(extract("\n \n\t\n").is_empty());
    }

    #[test]
    fn summarize_empty() {
        assert!(matches!(summarize(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn summarize_exact() {
        assert_eq!(summarize(&[0.5, 0.7, 0.9]).unwrap(), 0.7);
        assert_eq!(summarize(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(summarize(&[0.1; 10]).unwrap(), 0.1);
        assert_eq!(summarize(&[0.0]).unwrap(), 0.0);
    }

    #[test]
    fn summarize_order_independent() {
        let a = summarize(&[0.9812, 0.9734, 0.9901, 0.9655]).unwrap();
        let b = summarize(&[0.9655, 0.9901, 0.9734, 0.9812]).unwrap();
        assert_eq!(a, b);
        assert_relative_eq!(a, 0.97755, epsilon = 1e-12);
    }

    #[test]
    fn summarize_extracted_never_fails() {
        for text in ["0.1", "x\n0.2\ny", "1\n2\n3\n", "-1e300\n1e300\n"] {
            let scores = extract(text);
            assert!(!scores.is_empty());
            assert!(summarize(&scores).is_ok());
        }
    }

    #[test]
    fn summarize_large_magnitudes() {
        let mean = summarize(&[1e300, 1e300]).unwrap();
        assert!(mean.is_finite());
        assert_relative_eq!(mean, 1e300);
    }

    #[test]
    fn summarize_overflowing_sum() {
        let scores = extract("1e308\n1e308\n");
        assert_eq!(summarize(&scores).unwrap(), 1e308);

        assert_eq!(summarize(&[f64::MAX, f64::MAX]).unwrap(), f64::MAX);
        assert_eq!(summarize(&[-1e308, -1e308]).unwrap(), -1e308);

        let mean = summarize(&[1e308, 1e308, -1e308]).unwrap();
        assert!(mean.is_finite());
        assert_relative_eq!(mean, 1e308 / 3.0, max_relative = 1e-15);
    }

    #[test]
    fn format_list() {
        assert_eq!(format_scores(&[]), "[]");
        assert_eq!(format_scores(&[1.0, 2.0, 3.0]), "[1.0, 2.0, 3.0]");
        assert_eq!(format_scores(&[0.9812]), "[0.9812]");
    }
}
