use super::*;

use asdf_lib::{config::Config, execute_source, Context};

/// Delimiter between the sections of an `.asdt` file.
const DELIMITER: &str = "################################\n";

/// Automatically detects and runs `.asdt` (asdf bundled test) files.
///
/// Such a file holds the source code, then optionally the standard input, and
/// finally the expected standard output, separated by delimiters.
#[by_resources("tests/exec/*.asdt")]
#[test]
fn exec_asdt(filename: &str) {
    let path = std::path::Path::new(filename);
    assert!(
        path.exists(),
        "Path of resource {} does not exist",
        path.display()
    );

    let content = std::fs::read_to_string(path)?;
    let sections: Vec<&str> = content.split(DELIMITER).collect();
    let (input, stdin, expected) = match sections[..] {
        [input, expected] => (input, "", expected),
        [input, stdin, expected] => (input, stdin, expected),
        _ => anyhow::bail!("not a valid .asdt file: expected two or three sections"),
    };

    let config = Config {
        input,
        filename: Some(filename),
        ..Default::default()
    };
    let mut context = Context::new(config);

    let output = match execute_source(&mut context, stdin) {
        Ok(res) => res?,
        Err(err) => {
            context.reporter.display()?;
            return Err(err);
        }
    };
    assert_eq!(output, expected);
}

#[test]
fn parsed_matches_hand_built() -> anyhow::Result<()> {
    let input = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/exec/count.asdt"
    ))?;
    let (input, _) = input.split_once(DELIMITER).unwrap();
    let config = Config {
        input,
        ..Default::default()
    };
    let mut context = Context::new(config);
    let parsed = asdf_lib::parse(&mut context)?;
    let built = examples::count_to_10();
    // Spans differ, names and shapes do not
    assert_eq!(parsed.funs.len(), built.funs.len());
    for (parsed, built) in parsed.funs.iter().zip(&built.funs) {
        assert_eq!(parsed.name, built.name);
        assert_eq!(parsed.params, built.params);
        assert_eq!(parsed.body.stmts.len(), built.body.stmts.len());
    }
    Ok(())
}
