use super::outs::Out;

/// The report handed back for one scenario.
///
/// Percentages are on a 0 to 100 scale and, like `ev`, rounded to two
/// decimals. The default value is the all-zero result returned for
/// scenarios that cannot be simulated.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityResult {
    pub equity: f64,
    pub ev: f64,
    pub hand_name: String,
    pub pot_odds: f64,
    pub outs: usize,
    pub draw_odds: f64,
    pub outs_list: Vec<Out>,
    pub dirty_outs: usize,
    pub dirty_outs_list: Vec<Out>,
    pub reverse_outs: usize,
    pub reverse_draw_odds: f64,
    pub reverse_outs_list: Vec<Out>,
}
