use aion_frontend::motion::card::{NUMERIC_TABLES, PERCENT_TABLES};
use aion_frontend::motion::{BreakpointTable, Lerp, Percent, ScrollProgress};
use proptest::prelude::*;

fn bounds(table: &BreakpointTable<f64>) -> (f64, f64) {
    table
        .outputs()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)))
}

fn as_numbers(table: &BreakpointTable<Percent>) -> Vec<f64> {
    table.outputs().iter().map(|p| p.0).collect()
}

proptest! {
    #[test]
    fn numeric_tables_never_overshoot(p in 0.0..=1.0f64) {
        for (name, table) in NUMERIC_TABLES {
            let (lo, hi) = bounds(&table);
            let y = table.at(p);
            prop_assert!(y >= lo && y <= hi, "{} gave {} at {}", name, y, p);
        }
    }

    #[test]
    fn percent_tables_never_overshoot(p in 0.0..=1.0f64) {
        for (name, table) in PERCENT_TABLES {
            let outputs = as_numbers(&table);
            let lo = outputs.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = outputs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let y = table.at(p).0;
            prop_assert!(y >= lo && y <= hi, "{} gave {} at {}", name, y, p);
        }
    }

    #[test]
    fn out_of_range_progress_clamps_to_boundary(raw in -10.0..10.0f64) {
        let p = ScrollProgress::new(raw).value();
        for (name, table) in NUMERIC_TABLES {
            if raw <= 0.0 {
                prop_assert_eq!(table.at(raw), table.first(), "{} below range", name);
                prop_assert_eq!(table.at(p), table.first());
            }
            if raw >= 1.0 {
                prop_assert_eq!(table.at(raw), table.last(), "{} above range", name);
                prop_assert_eq!(table.at(p), table.last());
            }
        }
    }

    #[test]
    fn neighbours_of_a_knot_converge_to_it(eps in 1e-9..1e-6f64) {
        for (name, table) in NUMERIC_TABLES {
            let (lo, hi) = bounds(&table);
            let tolerance = (hi - lo) * eps * 1e4 + 1e-9;
            for (&x, &y) in table.inputs().iter().zip(table.outputs()) {
                for probe in [x - eps, x + eps] {
                    let diff = (table.at(probe) - y).abs();
                    prop_assert!(diff <= tolerance, "{} jumps by {} near {}", name, diff, x);
                }
            }
        }
    }

    #[test]
    fn lerp_stays_between_endpoints(a in -1e3..1e3f64, b in -1e3..1e3f64, t in 0.0..=1.0f64) {
        let y = a.lerp(b, t);
        prop_assert!(y >= a.min(b) && y <= a.max(b));
    }
}

#[test]
fn every_knot_maps_to_its_authored_value() {
    for (name, table) in NUMERIC_TABLES {
        for (&x, &y) in table.inputs().iter().zip(table.outputs()) {
            assert_eq!(table.at(x), y, "{} at knot {}", name, x);
        }
    }
    for (name, table) in PERCENT_TABLES {
        for (&x, &y) in table.inputs().iter().zip(table.outputs()) {
            assert_eq!(table.at(x), y, "{} at knot {}", name, x);
        }
    }
}
