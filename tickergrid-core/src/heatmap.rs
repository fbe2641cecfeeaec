//! Heatmap classifiers — discrete style buckets from continuous percentages.
//!
//! Two independent schemes: average-return buckets and win-rate buckets.
//! Both are total monotonic step functions; boundary values belong to the
//! bucket named by the `<` comparison (only the −0.5 return boundary is
//! inclusive on the negative side).

/// Average-return bucket. Inputs are display percentages (0.6 = 0.6%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnHeat {
    NegHigh,
    NegMed,
    NegLow,
    PosLow,
    PosMed,
    PosHigh,
}

impl ReturnHeat {
    pub fn classify(pct: f64) -> Self {
        if pct <= -0.5 {
            ReturnHeat::NegHigh
        } else if pct < 0.0 {
            ReturnHeat::NegMed
        } else if pct < 0.05 {
            // near zero
            ReturnHeat::NegLow
        } else if pct < 0.5 {
            ReturnHeat::PosLow
        } else if pct < 1.0 {
            ReturnHeat::PosMed
        } else {
            ReturnHeat::PosHigh
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ReturnHeat::NegHigh => "heat-ret-neg-high",
            ReturnHeat::NegMed => "heat-ret-neg-med",
            ReturnHeat::NegLow => "heat-ret-neg-low",
            ReturnHeat::PosLow => "heat-ret-pos-low",
            ReturnHeat::PosMed => "heat-ret-pos-med",
            ReturnHeat::PosHigh => "heat-ret-pos-high",
        }
    }
}

/// Win-rate bucket over the 0–100 domain: below 40, then 5-point steps
/// up to 70 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateHeat {
    Under40,
    From40,
    From45,
    From50,
    From55,
    From60,
    From65,
    From70,
}

impl WinRateHeat {
    pub fn classify(pct: f64) -> Self {
        if pct < 40.0 {
            WinRateHeat::Under40
        } else if pct < 45.0 {
            WinRateHeat::From40
        } else if pct < 50.0 {
            WinRateHeat::From45
        } else if pct < 55.0 {
            WinRateHeat::From50
        } else if pct < 60.0 {
            WinRateHeat::From55
        } else if pct < 65.0 {
            WinRateHeat::From60
        } else if pct < 70.0 {
            WinRateHeat::From65
        } else {
            WinRateHeat::From70
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            WinRateHeat::Under40 => "heat-0-40",
            WinRateHeat::From40 => "heat-40-45",
            WinRateHeat::From45 => "heat-45-50",
            WinRateHeat::From50 => "heat-50-55",
            WinRateHeat::From55 => "heat-55-60",
            WinRateHeat::From60 => "heat-60-65",
            WinRateHeat::From65 => "heat-65-70",
            WinRateHeat::From70 => "heat-70-100",
        }
    }
}
