use anyhow::Result;
use roman_calc::domain::model::ZeroStyle;
use roman_calc::{EtlEngine, EtlError, LocalStorage, RomanPipeline, Settings};
use std::fs;
use tempfile::TempDir;

fn run_in(dir: &TempDir, settings: Settings) -> roman_calc::Result<roman_calc::core::RunSummary> {
    let storage = LocalStorage::new(dir.path());
    let pipeline = RomanPipeline::new(storage, settings);
    EtlEngine::new(pipeline).run()
}

fn read_output(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

#[test]
fn test_end_to_end_scenarios() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("input.txt"),
        "III + II\nX / 0\nIIII + V\nV % II\n   \nMCMXCIV * I\nX - L\n",
    )?;

    let summary = run_in(&temp_dir, Settings::default())?;

    assert_eq!(
        read_output(&temp_dir, "output.txt"),
        "Five\n\
         Division by zero is undefined.\n\
         Invalid Roman numeral(s)\n\
         Invalid operator: %\n\
         One Thousand Nine Hundred Ninety Four\n\
         Forty\n"
    );
    assert_eq!(summary.lines_read, 7);
    assert_eq!(summary.blank_lines, 1);
    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.diagnostic_total(), 3);
    Ok(())
}

#[test]
fn test_blank_lines_produce_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("input.txt"), "\n  \t \n\r\nI + I\n\n")?;

    run_in(&temp_dir, Settings::default())?;

    assert_eq!(read_output(&temp_dir, "output.txt"), "Two\n");
    Ok(())
}

#[test]
fn test_malformed_lines_do_not_abort_the_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("input.txt"),
        "garbage\nIVX + Q\nI + I + I\nX ++ V\nC * C\nM * M * M\nM / M",
    )?;

    run_in(&temp_dir, Settings::default())?;

    assert_eq!(
        read_output(&temp_dir, "output.txt"),
        "Invalid input\nInvalid Roman numeral(s)\nInvalid input\nInvalid input\nTen Thousand\nInvalid input\nOne\n"
    );
    Ok(())
}

#[test]
fn test_zero_result_styles() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("input.txt"), "V - V\nI / V\n")?;

    run_in(&temp_dir, Settings::default())?;
    assert_eq!(read_output(&temp_dir, "output.txt"), "Zero\nZero\n");

    let legacy = Settings {
        zero_style: ZeroStyle::Empty,
        ..Settings::default()
    };
    run_in(&temp_dir, legacy)?;
    assert_eq!(read_output(&temp_dir, "output.txt"), "\n\n");
    Ok(())
}

#[test]
fn test_missing_input_fails_without_touching_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("output.txt"), "previous run\n")?;

    let result = run_in(&temp_dir, Settings::default());

    match result {
        Err(e @ EtlError::InputOpenError { .. }) => assert_ne!(e.exit_code(), 0),
        other => panic!("expected input open error, got {:?}", other.map(|s| s.lines_read)),
    }
    assert_eq!(read_output(&temp_dir, "output.txt"), "previous run\n");
    Ok(())
}

#[test]
fn test_unwritable_output_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("input.txt"), "I + I\n")?;
    let settings = Settings {
        output_path: "no_such_dir/output.txt".to_string(),
        ..Settings::default()
    };

    let result = run_in(&temp_dir, settings);

    assert!(matches!(result, Err(EtlError::OutputOpenError { .. })));
    Ok(())
}

#[test]
fn test_output_is_overwritten_and_idempotent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("input.txt"),
        "MM * MM\nCM + XC\nD - MD\n",
    )?;
    fs::write(
        temp_dir.path().join("output.txt"),
        "a much longer stale output file that must not leave fragments behind\n",
    )?;

    run_in(&temp_dir, Settings::default())?;
    let first = fs::read(temp_dir.path().join("output.txt"))?;
    run_in(&temp_dir, Settings::default())?;
    let second = fs::read(temp_dir.path().join("output.txt"))?;

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first)?,
        "Four Million\nNine Hundred Ninety\nOne Thousand\n"
    );
    Ok(())
}

#[test]
fn test_summary_json_written_when_requested() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("input.txt"), "III + II\nX / 0\n\n")?;
    let settings = Settings {
        summary_path: Some("reports/summary.json".to_string()),
        ..Settings::default()
    };

    run_in(&temp_dir, settings)?;

    let json: serde_json::Value =
        serde_json::from_str(&read_output(&temp_dir, "reports/summary.json"))?;
    assert_eq!(json["lines_read"], 3);
    assert_eq!(json["evaluated"], 1);
    assert_eq!(json["blank_lines"], 1);
    assert_eq!(json["diagnostic_counts"]["division_by_zero"], 1);
    assert_eq!(json["diagnostics"][0]["line_number"], 2);
    assert_eq!(
        json["diagnostics"][0]["message"],
        "Division by zero is undefined."
    );
    Ok(())
}
