use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yawcorr::{correct_yaw, wrap_deg, CorrectionTable};

#[derive(Parser, Debug)]
#[command(author, version, about = "Spherical yaw correction for 360° video")]
struct Cli {
    /// Yaw angles in degrees.
    #[arg(
        value_name = "YAW_DEG",
        allow_negative_numbers = true,
        required_unless_present = "sweep"
    )]
    yaw_deg: Vec<f32>,
    /// Sweep a range instead: start, end (exclusive) and step, in degrees.
    #[arg(
        long,
        value_names = ["START", "END", "STEP"],
        num_args = 3,
        allow_negative_numbers = true,
        conflicts_with = "yaw_deg"
    )]
    sweep: Option<Vec<f32>>,
    /// Wrap inputs into [0, 360) before correcting.
    #[arg(long)]
    wrap: bool,
    /// Emit JSON records instead of plain text.
    #[arg(long)]
    json: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Record {
    yaw_deg: f32,
    corrected_deg: f32,
}

fn emit(records: &[Record], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for record in records {
            println!("{:10.4} -> {:10.4}", record.yaw_deg, record.corrected_deg);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("yawcorr=debug".parse()?))
            .with_target(false)
            .init();
    }

    let records = if let Some(sweep) = &cli.sweep {
        let (start, end, step) = (sweep[0], sweep[1], sweep[2]);
        let table = CorrectionTable::new(start, end, step)?;
        table
            .iter()
            .map(|(angle, value)| {
                if cli.wrap {
                    let wrapped = wrap_deg(angle);
                    Record {
                        yaw_deg: angle,
                        corrected_deg: correct_yaw(wrapped),
                    }
                } else {
                    Record {
                        yaw_deg: angle,
                        corrected_deg: value,
                    }
                }
            })
            .collect::<Vec<_>>()
    } else {
        cli.yaw_deg
            .iter()
            .map(|&yaw| {
                let input = if cli.wrap { wrap_deg(yaw) } else { yaw };
                Record {
                    yaw_deg: yaw,
                    corrected_deg: correct_yaw(input),
                }
            })
            .collect()
    };

    emit(&records, cli.json)
}
