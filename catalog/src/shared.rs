//! Option lists and summary helpers shared across modules.

use records::{Record, SelectOption};

pub(crate) const DEPARTMENTS: &[(&str, &str)] = &[
    ("生产部", "production"),
    ("品保部", "quality"),
    ("研发部", "rd"),
    ("仓管部", "logistics"),
    ("生技部", "equipment"),
];

pub(crate) const WORK_STATUS: &[(&str, &str)] =
    &[("待处理", "pending"), ("处理中", "processing"), ("已解决", "solved"), ("已关闭", "closed")];

pub(crate) fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs.iter().map(|(label, value)| SelectOption::new(*label, *value)).collect()
}

/// Select label in `key`, or `unknown` when unset or blank.
pub(crate) fn label_or<'a>(record: &'a Record, key: &str, unknown: &'a str) -> &'a str {
    record.choice_label(key).filter(|l| !l.is_empty()).unwrap_or(unknown)
}

/// Records sharing one label, with whatever was accumulated for them.
pub(crate) struct Group<T> {
    pub label: String,
    pub count: usize,
    pub acc: T,
}

/// Group records by `label` in first-seen order, folding each into its
/// group's accumulator with `add`.
pub(crate) fn group_by<T: Default>(
    records: &[Record],
    label: impl Fn(&Record) -> String,
    mut add: impl FnMut(&mut T, &Record),
) -> Vec<Group<T>> {
    let mut groups: Vec<Group<T>> = Vec::new();
    for record in records {
        let label = label(record);
        let index = match groups.iter().position(|g| g.label == label) {
            Some(index) => index,
            None => {
                groups.push(Group { label, count: 0, acc: T::default() });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        group.count += 1;
        add(&mut group.acc, record);
    }
    groups
}

/// Count records per select label, in first-seen order. Records without a
/// choice in `key` count under `unknown`.
pub(crate) fn tally(records: &[Record], key: &str, unknown: &str) -> Vec<(String, usize)> {
    group_by::<()>(records, |r| label_or(r, key, unknown).to_owned(), |_, _| {})
        .into_iter()
        .map(|g| (g.label, g.count))
        .collect()
}

/// Number of distinct select labels in `key`; unset counts as one more.
pub(crate) fn distinct_labels(records: &[Record], key: &str) -> usize {
    let mut seen: Vec<Option<&str>> = Vec::new();
    for label in records.iter().map(|r| r.choice_label(key)) {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen.len()
}

/// Records whose select label in `key` is one of `labels`.
pub(crate) fn count_labels(records: &[Record], key: &str, labels: &[&str]) -> usize {
    records.iter().filter(|r| r.choice_label(key).is_some_and(|l| labels.contains(&l))).count()
}

/// Leading integer of `raw` the way a lenient form parser reads it:
/// surrounding whitespace skipped, optional sign, then digits. Anything
/// unparsable is 0.
pub(crate) fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// Numeric score held in a select field's option value.
pub(crate) fn choice_score(record: &Record, key: &str) -> i64 {
    record.choice_value(key).map_or(0, leading_int)
}

/// Integer held in a text field.
pub(crate) fn text_int(record: &Record, key: &str) -> i64 {
    record.text(key).map_or(0, leading_int)
}

/// Half-up rounding to an integer, as dashboards display averages.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn int_f64(n: i64) -> f64 {
    n as f64
}

#[cfg(test)]
#[path = "shared_test.rs"]
mod tests;
