//! Landmark N-body simulation records
//!
//! Each record pins one published long-term solar-system integration to a
//! point on the efficiency axis: how many simulated years the run chewed
//! through per wall-clock second. Rates are quoted from the papers in
//! whatever units they reported, so every constant keeps the arithmetic
//! that produced it.

use serde::Serialize;

use crate::units::{DAY, HOUR, MINUTE, MONTH, TO_MYR_PER_MONTH};

/// Jupiter semi-major axis [au]
const JUPITER_AU: f64 = 5.2;

/// Mercury semi-major axis [au]
const MERCURY_AU: f64 = 0.387;

/// Standard annotation placement: just right of the marker and above it
const OFFSET: (f64, f64) = (0.2, 1.25);

/// Which part of the solar system an integration modeled
///
/// Outer-regime runs take much longer timesteps than inner-regime runs, so
/// their raw rates are not directly comparable; see
/// [`FigureVariant::outer_to_inner_rescale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Full system or inner planets (Mercury-scale timesteps)
    Inner,
    /// Outer planets only (Jupiter-scale timesteps)
    Outer,
}

/// One published N-body integration
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulationRecord {
    /// Publication year; fractional to separate same-year entries on the axis
    pub year: f64,

    /// Simulated years per wall-clock second, as quoted
    pub rate: f64,

    /// Which regime the run integrated
    pub regime: Regime,

    /// Citation label
    pub label: &'static str,

    /// Ran on purpose-built hardware rather than a general-purpose machine
    pub special_hardware: bool,

    /// Short code drawn next to the marker
    pub short_code: &'static str,

    /// Annotation placement: years right of the marker, factor above it
    pub annotation_offset: (f64, f64),
}

impl SimulationRecord {
    /// Efficiency in simulated megayears per month of compute, on the
    /// shared inner-regime scale
    pub fn normalized_efficiency(&self, outer_rescale: f64) -> f64 {
        let myr_per_month = self.rate * TO_MYR_PER_MONTH;
        match self.regime {
            Regime::Inner => myr_per_month,
            Regime::Outer => myr_per_month / outer_rescale,
        }
    }

    /// Marker position in (year, efficiency) data space
    pub fn marker_point(&self, outer_rescale: f64) -> (f64, f64) {
        (self.year, self.normalized_efficiency(outer_rescale))
    }

    /// Where the short-code annotation goes, offset from the marker
    pub fn annotation_point(&self, outer_rescale: f64) -> (f64, f64) {
        let (year, efficiency) = self.marker_point(outer_rescale);
        (
            year + self.annotation_offset.0,
            efficiency * self.annotation_offset.1,
        )
    }
}

/// The record table as originally published
///
/// Eckert's punched-card integration covered 40 simulated years per machine
/// run; the TRS-80 entry is the same orbit problem on 1978 home hardware.
pub const CLASSIC_RECORDS: [SimulationRecord; 12] = [
    SimulationRecord {
        year: 1950.0,
        rate: (40.0 / 365.0) / (2.0 * MINUTE),
        regime: Regime::Outer,
        label: "Ekert '52",
        special_hardware: false,
        short_code: "EBC52",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1965.0,
        rate: 1500.0 / HOUR,
        regime: Regime::Outer,
        label: "Cohen & Hubbard '65",
        special_hardware: false,
        short_code: "CH65",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1978.0,
        rate: (40.0 / 365.0) / 10.0,
        regime: Regime::Outer,
        label: "TRS-80",
        special_hardware: false,
        short_code: "TRS-80",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1984.1,
        rate: 5e6 / (4.0 * HOUR),
        regime: Regime::Outer,
        label: "Kinoshita & Nakai'84",
        special_hardware: true,
        short_code: "KN84",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1986.0,
        rate: 60.0 * 1e8 / (365.0 * DAY),
        regime: Regime::Outer,
        label: "Applegate+ '86",
        special_hardware: true,
        short_code: "A+86",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1991.1,
        rate: 3e6 / (2.0 * MONTH),
        regime: Regime::Inner,
        label: "Quinn+ '91",
        special_hardware: false,
        short_code: "QDT91",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 1991.0,
        rate: 1e9 / (14.0 * DAY),
        regime: Regime::Outer,
        label: "Wisdom & Holman '91",
        special_hardware: false,
        short_code: "WH91",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 2008.0,
        rate: 20e9 / (6.0 * MONTH),
        regime: Regime::Inner,
        label: "Batygin & Laughlin '08",
        special_hardware: false,
        short_code: "BL08",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 2009.0,
        rate: 5e9 / (2500.0 * HOUR),
        regime: Regime::Inner,
        label: "Laskar & Gastineau '09",
        special_hardware: false,
        short_code: "LG09",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 2020.0,
        rate: 5e9 * 96.0 / (6.0 * 12.0 * MONTH),
        regime: Regime::Inner,
        label: "Brown & Rein '20",
        special_hardware: false,
        short_code: "BR20",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 2023.0,
        rate: 2.0 * 2750.0 * 5e9 / (2.5e6 * HOUR),
        regime: Regime::Inner,
        label: "Abbot+ '23",
        special_hardware: false,
        short_code: "A+23",
        annotation_offset: OFFSET,
    },
    SimulationRecord {
        year: 2023.1,
        rate: 1e9 / DAY,
        regime: Regime::Inner,
        label: "Javaheri+ '23",
        special_hardware: false,
        short_code: "JRT23",
        annotation_offset: OFFSET,
    },
];

/// The classic table plus the Digital Orrery Pluto run and the Ito &
/// Tanikawa full-system integration, with annotations nudged apart in the
/// crowded mid-1980s cluster
pub const REVISED_RECORDS: [SimulationRecord; 14] = [
    CLASSIC_RECORDS[0],
    CLASSIC_RECORDS[1],
    CLASSIC_RECORDS[2],
    CLASSIC_RECORDS[3],
    SimulationRecord {
        annotation_offset: (0.2, 0.62),
        ..CLASSIC_RECORDS[4]
    },
    SimulationRecord {
        year: 1988.0,
        rate: 845e6 / (14.0 * MONTH),
        regime: Regime::Outer,
        label: "Sussman & Wisdom '88",
        special_hardware: true,
        short_code: "SW88",
        annotation_offset: OFFSET,
    },
    CLASSIC_RECORDS[5],
    CLASSIC_RECORDS[6],
    SimulationRecord {
        year: 2002.0,
        rate: 1e10 / (18.0 * MONTH),
        regime: Regime::Inner,
        label: "Ito & Tanikawa '02",
        special_hardware: false,
        short_code: "IT02",
        annotation_offset: OFFSET,
    },
    CLASSIC_RECORDS[7],
    CLASSIC_RECORDS[8],
    CLASSIC_RECORDS[9],
    CLASSIC_RECORDS[10],
    CLASSIC_RECORDS[11],
];

/// Which edition of the figure to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FigureVariant {
    /// The table and rescaling as originally published
    Classic,
    /// Step-count-corrected rescaling plus the 1988 and 2002 landmark runs
    Revised,
}

impl FigureVariant {
    /// Parse from string (as passed on the command line)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "classic" => Some(Self::Classic),
            "revised" => Some(Self::Revised),
            _ => None,
        }
    }

    /// Lower-case name, as accepted by [`FigureVariant::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Revised => "revised",
        }
    }

    /// The record table this variant plots
    pub fn records(&self) -> &'static [SimulationRecord] {
        match self {
            Self::Classic => &CLASSIC_RECORDS,
            Self::Revised => &REVISED_RECORDS,
        }
    }

    /// Factor dividing outer-regime rates down to the inner-regime scale
    ///
    /// Kepler's third law turns the Jupiter/Mercury semi-major-axis ratio
    /// into the ratio of shortest resolved orbital periods, hence of
    /// timestep sizes. The revised variant additionally charges outer-only
    /// runs the squared body-count ratio of the 9-planet force loop they
    /// skipped.
    pub fn outer_to_inner_rescale(&self) -> f64 {
        let kepler = (JUPITER_AU / MERCURY_AU).powf(1.5);
        match self {
            Self::Classic => kepler,
            Self::Revised => kepler * ((9.0 / 5.0) * (9.0 / 5.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Relative closeness for values quoted to ~5 significant figures
    fn close(value: f64, expected: f64) -> bool {
        ((value - expected) / expected).abs() < 1e-4
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(CLASSIC_RECORDS.len(), 12);
        assert_eq!(REVISED_RECORDS.len(), 14);
    }

    #[test]
    fn test_classic_normalized_efficiencies() {
        let rescale = FigureVariant::Classic.outer_to_inner_rescale();
        let expected = [
            ("EBC52", 4.8060e-5),
            ("CH65", 2.1927e-2),
            ("TRS-80", 5.7672e-4),
            ("KN84", 18.273),
            ("A+86", 10.012),
            ("QDT91", 1.5),
            ("WH91", 43.507),
            ("BL08", 3333.3),
            ("LG09", 1440.0),
            ("BR20", 6666.7),
            ("A+23", 7920.0),
            ("JRT23", 30000.0),
        ];

        for (record, (code, value)) in CLASSIC_RECORDS.iter().zip(expected) {
            let efficiency = record.normalized_efficiency(rescale);
            assert_eq!(record.short_code, code);
            assert!(
                close(efficiency, value),
                "{}: got {}, expected {}",
                code,
                efficiency,
                value
            );
        }
    }

    #[test]
    fn test_rescale_constants_exact() {
        assert_eq!(
            FigureVariant::Classic.outer_to_inner_rescale(),
            (5.2f64 / 0.387).powf(1.5)
        );
        assert_eq!(
            FigureVariant::Revised.outer_to_inner_rescale(),
            (5.2f64 / 0.387).powf(1.5) * ((9.0f64 / 5.0) * (9.0f64 / 5.0))
        );
    }

    #[test]
    fn test_inner_records_ignore_rescale() {
        let classic = FigureVariant::Classic.outer_to_inner_rescale();
        let revised = FigureVariant::Revised.outer_to_inner_rescale();

        for record in &CLASSIC_RECORDS {
            if record.regime == Regime::Inner {
                assert_eq!(
                    record.normalized_efficiency(classic),
                    record.normalized_efficiency(revised)
                );
            }
        }
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(FigureVariant::from_str("classic"), Some(FigureVariant::Classic));
        assert_eq!(FigureVariant::from_str("revised"), Some(FigureVariant::Revised));
        assert_eq!(FigureVariant::from_str("modern"), None);
    }

    #[test]
    fn test_revised_extends_classic() {
        let classic_codes: Vec<&str> = CLASSIC_RECORDS.iter().map(|r| r.short_code).collect();
        let revised_codes: Vec<&str> = REVISED_RECORDS.iter().map(|r| r.short_code).collect();

        for code in &classic_codes {
            assert!(revised_codes.contains(code));
        }
        assert!(!classic_codes.contains(&"SW88"));
        assert!(!classic_codes.contains(&"IT02"));
        assert!(revised_codes.contains(&"SW88"));
        assert!(revised_codes.contains(&"IT02"));
    }

    #[test]
    fn test_records_within_plot_range() {
        for variant in [FigureVariant::Classic, FigureVariant::Revised] {
            for record in variant.records() {
                assert!(record.rate > 0.0, "{} rate", record.short_code);
                assert!(
                    record.year > 1945.0 && record.year < 2035.0,
                    "{} year",
                    record.short_code
                );
            }
        }
    }

    #[test]
    fn test_annotation_point_offsets() {
        let rescale = FigureVariant::Classic.outer_to_inner_rescale();
        // A+23 sits at exactly 7920 Myr/month
        let record = &CLASSIC_RECORDS[10];
        assert_eq!(record.short_code, "A+23");

        let (x, y) = record.annotation_point(rescale);
        assert!(close(x, 2023.2));
        assert!(close(y, 9900.0));
        assert_eq!(y, record.normalized_efficiency(rescale) * 1.25);
    }
}
