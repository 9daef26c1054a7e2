use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value as JsonValue};

const METRICS: [&str; 7] = ["EHI", "EF1", "PH", "OF", "NH", "LF", "EF"];

/// Write synthetic before/after metric files for three models.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Records per file
    #[arg(short, long, default_value_t = 100)]
    records: usize,

    /// Fraction of values left out to exercise missing-value handling
    #[arg(long, default_value_t = 0.03)]
    missing: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Seeded xoshiro256** generator; the same seed always yields the same files.
struct MetricRng {
    state: [u64; 4],
}

impl MetricRng {
    /// State words come from splitmix64 so nearby seeds diverge immediately.
    fn seeded(seed: u64) -> Self {
        let mut x = seed;
        let state = std::array::from_fn(|_| {
            x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        });
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.state;
        let out = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);
        out
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Normal sample (Box-Muller), floored at zero since metrics are non-negative.
    fn metric(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.unit().max(f64::MIN_POSITIVE);
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        (mean + std_dev * z).max(0.0)
    }
}

/// Per-model profile: (mean before, improvement after fine-tuning).
struct Profile {
    file: &'static str,
    baseline: f64,
    gain: f64,
}

const PROFILES: [Profile; 3] = [
    Profile { file: "mistral_7b_metrics.json", baseline: 0.55, gain: 0.20 },
    Profile { file: "distilbart_metrics.json", baseline: 0.45, gain: 0.15 },
    Profile { file: "flan_t5_metrics.json", baseline: 0.40, gain: 0.25 },
];

fn generate_records(profile: &Profile, n: usize, missing: f64, rng: &mut MetricRng) -> Vec<JsonValue> {
    (0..n)
        .map(|_| {
            let mut rec = Map::new();
            for (k, metric) in METRICS.iter().enumerate() {
                // Spread metrics around the model baseline; values may exceed 1.
                let base = profile.baseline + 0.04 * k as f64;
                let before = rng.metric(base, 0.12);
                let after = rng.metric(base + profile.gain, 0.12);
                for (suffix, value) in [("before", before), ("after", after)] {
                    let v = if rng.chance(missing) {
                        JsonValue::Null
                    } else {
                        JsonValue::from((value * 10_000.0).round() / 10_000.0)
                    };
                    rec.insert(format!("{metric}_{suffix}"), v);
                }
            }
            JsonValue::Object(rec)
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = MetricRng::seeded(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for profile in &PROFILES {
        let records = generate_records(profile, args.records, args.missing, &mut rng);
        let path = args.out_dir.join(profile.file);
        let text = serde_json::to_string_pretty(&records).context("serializing records")?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records(seed: u64, missing: f64) -> Vec<JsonValue> {
        generate_records(&PROFILES[0], 25, missing, &mut MetricRng::seeded(seed))
    }

    #[test]
    fn same_seed_same_records() {
        assert_eq!(records(42, 0.1), records(42, 0.1));
        assert_ne!(records(42, 0.1), records(43, 0.1));
    }

    #[test]
    fn every_record_has_all_keys() {
        for rec in records(7, 0.0) {
            let obj = rec.as_object().unwrap();
            assert_eq!(obj.len(), METRICS.len() * 2);
            for metric in METRICS {
                for suffix in ["before", "after"] {
                    let v = obj[&format!("{metric}_{suffix}")].as_f64().unwrap();
                    assert!(v >= 0.0);
                }
            }
        }
    }

    #[test]
    fn missing_fraction_one_nulls_everything() {
        let recs = records(1, 1.0);
        assert!(recs.iter().flat_map(|r| r.as_object().unwrap().values()).all(JsonValue::is_null));
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng = MetricRng::seeded(0);
        assert!((0..10_000).map(|_| rng.unit()).all(|u| (0.0..1.0).contains(&u)));
    }
}
