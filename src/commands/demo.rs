use crate::config::DemoSettings;
use crate::core::{
    fibonacci_sequence, terms, Method, MAX_EXACT_POSITION, SLOW_RECURSION_POSITION,
};
use crate::errors::Result;
use crate::formatting::OutputFormatter;
use crate::io::output::write_sequence;
use std::io::Write;
use tracing::{debug, warn};

/// Print the fixed demonstration: three ways of listing the first
/// `settings.terms` numbers, then a longer list from the sequence builder.
pub fn run_demo<W: Write + ?Sized>(
    writer: &mut W,
    settings: &DemoSettings,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    warn_about_limits(settings);

    let n = settings.terms;
    let sections = [
        (format!("First {} Fibonacci numbers:", n), Method::Sequence),
        (
            format!("Using recursion for first {} terms:", n),
            Method::Recursive,
        ),
        (
            format!("Using iterative approach for first {} terms:", n),
            Method::Iterative,
        ),
    ];

    for (index, (title, method)) in sections.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        debug!(%method, terms = n, "Demo section");
        writeln!(writer, "{}", formatter.header(title))?;
        write_sequence(writer, &terms(*method, n))?;
    }

    let extended = settings.extended_terms;
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        formatter.header(&format!("First {} Fibonacci numbers:", extended))
    )?;
    write_sequence(writer, &fibonacci_sequence(extended))?;

    Ok(())
}

fn warn_about_limits(settings: &DemoSettings) {
    let largest = settings.terms.max(settings.extended_terms);
    if largest > MAX_EXACT_POSITION + 1 {
        warn!(
            terms = largest,
            "Terms beyond position {} overflow i64 and will wrap", MAX_EXACT_POSITION
        );
    }
    if settings.terms > SLOW_RECURSION_POSITION {
        warn!(
            terms = settings.terms,
            "Recursive section is exponential; this may take a long time"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render(settings: &DemoSettings) -> String {
        let mut buffer = Vec::new();
        run_demo(&mut buffer, settings, &PlainFormatter).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default_demo_output() {
        let expected = indoc! {"
            First 10 Fibonacci numbers:
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]

            Using recursion for first 10 terms:
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]

            Using iterative approach for first 10 terms:
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]

            First 20 Fibonacci numbers:
            [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181]
        "};
        assert_eq!(render(&DemoSettings::default()), expected);
    }

    #[test]
    fn test_custom_term_counts() {
        let settings = DemoSettings {
            terms: 3,
            extended_terms: 5,
        };
        let expected = indoc! {"
            First 3 Fibonacci numbers:
            [0, 1, 1]

            Using recursion for first 3 terms:
            [0, 1, 1]

            Using iterative approach for first 3 terms:
            [0, 1, 1]

            First 5 Fibonacci numbers:
            [0, 1, 1, 2, 3]
        "};
        assert_eq!(render(&settings), expected);
    }

    #[test]
    fn test_zero_terms_prints_empty_lists() {
        let settings = DemoSettings {
            terms: 0,
            extended_terms: -2,
        };
        let output = render(&settings);
        assert_eq!(output.matches("[]\n").count(), 4);
    }
}
