//! The FixedArray walkthrough printed by `dsa-demo`.

use std::io::Write;

use dsa_handbook::FixedArray;

use crate::cli::DemoArgs;
use crate::common::CliResult;

/// Number of elements in the demo array.
pub const LEN: usize = 5;

/// Value used for the deliberate write at `args.out_of_bounds_index`.
pub const PROBE_VALUE: i32 = 100;

/// Fills a `FixedArray<i32, LEN>` with `i * 10`, prints every element, then
/// attempts one write at `args.out_of_bounds_index`.
///
/// A rejected write is reported on `out` and is not an error.
pub fn run(args: &DemoArgs, out: &mut impl Write) -> CliResult<()> {
    let mut arr: FixedArray<i32, LEN> = FixedArray::new();

    for i in 0..arr.size() {
        arr.set(i, i as i32 * 10)?;
    }

    for i in 0..arr.size() {
        writeln!(out, "Element at index {i}: {}", arr.get(i)?)?;
    }

    let index = args.out_of_bounds_index;
    match arr.set(index, PROBE_VALUE) {
        Ok(()) => writeln!(out, "Wrote {PROBE_VALUE} at index {index}")?,
        Err(err) => {
            tracing::debug!(error = %err, "Handled out-of-range write");
            writeln!(out, "Caught error: {err}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    fn render(args: &DemoArgs) -> String {
        let mut out = Vec::new();
        run(args, &mut out).expect("demo should not fail");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_walkthrough() {
        let output = render(&DemoArgs::default());
        expect![[r#"
            Element at index 0: 0
            Element at index 1: 10
            Element at index 2: 20
            Element at index 3: 30
            Element at index 4: 40
            Caught error: index out of bounds: the len is 5 but the index is 5
        "#]]
        .assert_eq(&output);
    }

    #[test]
    fn far_out_of_bounds_index() {
        let output = render(&DemoArgs {
            out_of_bounds_index: usize::MAX,
        });
        assert!(output.ends_with(&format!(
            "Caught error: index out of bounds: the len is 5 but the index is {}\n",
            usize::MAX
        )));
    }

    #[test]
    fn in_range_probe_is_written() {
        let output = render(&DemoArgs {
            out_of_bounds_index: 2,
        });
        expect![[r#"
            Element at index 0: 0
            Element at index 1: 10
            Element at index 2: 20
            Element at index 3: 30
            Element at index 4: 40
            Wrote 100 at index 2
        "#]]
        .assert_eq(&output);
    }

    #[test]
    fn write_failure_is_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = run(&DemoArgs::default(), &mut Closed).unwrap_err();
        assert!(matches!(err, crate::common::CliError::Io(_)));
    }
}
