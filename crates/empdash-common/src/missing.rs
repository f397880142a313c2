//! Text markers read as missing values.

/// Field contents that load as missing, in addition to empty fields.
///
/// Matches the default missing-value markers of pandas, so a file exported
/// from a spreadsheet or a notebook loads with the same gaps.
pub const NA_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if `text` is empty or one of [`NA_VALUES`].
///
/// Comparison is exact: `" NA"` and `"na"` are ordinary text.
pub fn is_na_token(text: &str) -> bool {
    text.is_empty() || NA_VALUES.contains(&text)
}
