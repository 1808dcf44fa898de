use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Write a synthetic student-performance dataset for the ingestion step.
#[derive(Parser, Debug)]
struct Args {
    /// Output CSV file
    #[arg(default_value = "notebook/data/stud.csv")]
    output: PathBuf,

    /// Number of students
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const GENDERS: [&str; 2] = ["female", "male"];
const GROUPS: [&str; 5] = ["group A", "group B", "group C", "group D", "group E"];
const EDUCATION: [&str; 6] = [
    "some high school",
    "high school",
    "some college",
    "associate's degree",
    "bachelor's degree",
    "master's degree",
];
const LUNCH: [&str; 2] = ["standard", "free/reduced"];
const PREP: [&str; 2] = ["none", "completed"];

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn score(rng: &mut StdRng, mean: f64) -> u32 {
    gauss(rng, mean, 14.0).round().clamp(0.0, 100.0) as u32
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    if let Some(dir) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating '{}'", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating '{}'", args.output.display()))?;

    writer.write_record([
        "gender",
        "race_ethnicity",
        "parental_level_of_education",
        "lunch",
        "test_preparation_course",
        "math_score",
        "reading_score",
        "writing_score",
    ])?;

    for _ in 0..args.rows {
        let gender = *GENDERS.choose(&mut rng).context("empty category")?;
        let group = *GROUPS.choose(&mut rng).context("empty category")?;
        let education_idx = rng.gen_range(0..EDUCATION.len());
        let lunch_idx = usize::from(rng.gen_bool(0.35));
        let prep_idx = usize::from(rng.gen_bool(0.36));

        // Shared ability term so the three scores correlate.
        let base = 66.0 + 1.5 * education_idx as f64 - 8.0 * lunch_idx as f64
            + 6.0 * prep_idx as f64;
        let ability = gauss(&mut rng, 0.0, 8.0);
        let (math_bias, verbal_bias) = if gender == "male" { (4.0, -4.0) } else { (-4.0, 4.0) };

        writer.write_record([
            gender.to_string(),
            group.to_string(),
            EDUCATION[education_idx].to_string(),
            LUNCH[lunch_idx].to_string(),
            PREP[prep_idx].to_string(),
            score(&mut rng, base + ability + math_bias).to_string(),
            score(&mut rng, base + ability + verbal_bias).to_string(),
            score(&mut rng, base + ability + verbal_bias).to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} students to {}", args.rows, args.output.display());
    Ok(())
}
