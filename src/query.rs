use chrono::NaiveDate;

use crate::generate::SUBJECTS;
use crate::models::DataFilter;

/// Converts a free-text query into a structured filter. The first matching
/// rule wins:
///
/// 1. empty string        -> empty filter (matches everything)
/// 2. `id:<rest>`         -> id substring filter
/// 3. `name:<rest>`       -> name substring filter
/// 4. `subject:<rest>`    -> subject substring filter
/// 5. `><int>`            -> minimum grade
/// 6. `<<int>` / `<<date>`-> maximum grade, falling back to a before-date;
///    the integer parse is attempted first, on purpose
/// 7. anything else       -> general search across id, name and (when the
///    token appears in the subject vocabulary) subject, OR-composed
///
/// Tokens that fail to parse in rules 5 and 6 add no constraint. The parser
/// never fails.
pub fn parse(text: &str) -> DataFilter {
    let value = text.trim().to_lowercase();
    let mut filter = DataFilter::default();

    if value.is_empty() {
        return filter;
    }

    if let Some(rest) = value.strip_prefix("id:") {
        filter.id = Some(rest.trim().to_string());
    } else if let Some(rest) = value.strip_prefix("name:") {
        filter.name = Some(rest.trim().to_string());
    } else if let Some(rest) = value.strip_prefix("subject:") {
        filter.subject = Some(rest.trim().to_string());
    } else if let Some(rest) = value.strip_prefix('>') {
        if let Ok(min) = rest.trim().parse::<i64>() {
            filter.grade.min = Some(min as f64);
        }
    } else if let Some(rest) = value.strip_prefix('<') {
        let token = rest.trim();
        if let Ok(max) = token.parse::<i64>() {
            filter.grade.max = Some(max as f64);
        } else if let Some(date) = parse_date(token) {
            filter.date.before = Some(date);
        }
    } else {
        filter.id = Some(value.clone());
        filter.name = Some(value.clone());
        filter.is_general_search = true;
        if SUBJECTS.iter().any(|s| s.to_lowercase().contains(&value)) {
            filter.subject = Some(value);
        }
    }

    filter
}

/// Reconstructs the canonical query string for a filter, so a text input can
/// be restored from persisted filter state. Field priority mirrors the parse
/// rules: id, name, subject, grade.min, grade.max, date.before, date.after.
/// General searches come back without a prefix token.
pub fn format(filter: &DataFilter) -> String {
    if let Some(id) = &filter.id {
        return if filter.is_general_search { id.clone() } else { format!("id:{id}") };
    }
    if let Some(name) = &filter.name {
        return if filter.is_general_search { name.clone() } else { format!("name:{name}") };
    }
    if let Some(subject) = &filter.subject {
        return if filter.is_general_search {
            subject.clone()
        } else {
            format!("subject:{subject}")
        };
    }
    if let Some(min) = filter.grade.min {
        return format!(">{min}");
    }
    if let Some(max) = filter.grade.max {
        return format!("<{max}");
    }
    if let Some(before) = filter.date.before {
        return format!("<{}", before.format("%Y-%m-%d"));
    }
    if let Some(after) = filter.date.after {
        return format!(">{}", after.format("%Y-%m-%d"));
    }
    String::new()
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(token, "%m/%d/%Y"))
        .ok()
}
