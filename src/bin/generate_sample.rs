use serde::Serialize;

/// One output row, serialised with the upstream dataset's column names.
#[derive(Serialize)]
struct SampleRecord {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: &'static str,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'static str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, launches, success probability) – roughly the upstream mix,
    // 56 records in total.
    let sites: [(&str, usize, f64); 4] = [
        ("CCAFS LC-40", 26, 0.27),
        ("CCAFS SLC-40", 7, 0.43),
        ("KSC LC-39A", 13, 0.77),
        ("VAFB SLC-4E", 10, 0.40),
    ];

    let boosters: [(&str, &str); 5] = [
        ("F9 v1.0  B0005", "v1.0"),
        ("F9 v1.1  B1011", "v1.1"),
        ("F9 FT B1021.1", "FT"),
        ("F9 B4 B1039.1", "B4"),
        ("F9 B5 B1046.1", "B5"),
    ];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut flight_number: u32 = 1;
    for (site, n_launches, success_rate) in sites {
        for _ in 0..n_launches {
            let (booster_version, category) = boosters[rng.pick(boosters.len())];

            // Payload masses cluster mid-range; clamp to the slider bounds.
            let payload = rng.gauss(4500.0, 2500.0).clamp(0.0, 9600.0);
            let payload_mass_kg = (payload * 10.0).round() / 10.0;

            let class = i64::from(rng.next_f64() < success_rate);

            writer
                .serialize(SampleRecord {
                    flight_number,
                    launch_site: site,
                    class,
                    payload_mass_kg,
                    booster_version,
                    booster_version_category: category,
                })
                .expect("Failed to write record");
            flight_number += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} launch records to {output_path}",
        flight_number - 1
    );
}
