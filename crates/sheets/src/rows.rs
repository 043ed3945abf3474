//! Spreadsheet row shapes and the email-keyed photo index.

use std::collections::HashMap;

/// Zero-based column holding the respondent's email address.
pub const EMAIL_COLUMN: usize = 1;

/// Zero-based column holding the drive share link of the uploaded photo.
pub const IMAGE_URL_COLUMN: usize = 4;

/// One usable row of the form-responses range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub email: String,
    pub image_url: String,
}

impl SheetRow {
    /// Build a row from raw cell values. Returns `None` when the row is too
    /// short to carry both the email and the photo link.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        let email = cells.get(EMAIL_COLUMN)?.trim();
        let image_url = cells.get(IMAGE_URL_COLUMN)?.trim();
        if email.is_empty() || image_url.is_empty() {
            return None;
        }
        Some(Self {
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
    }
}

/// Index photo URLs by respondent email.
///
/// This is the join key for pairing stored guests with their photos. The
/// earlier positional pairing (guest insertion order against row order)
/// produced wrong associations whenever the two orders diverged; an email
/// join is insensitive to ordering. The first row wins for duplicate
/// emails, matching the fetcher's first-download-sticks behaviour.
pub fn index_by_email(rows: &[SheetRow]) -> HashMap<String, String> {
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        index
            .entry(row.email.clone())
            .or_insert_with(|| row.image_url.clone());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn row(email: &str, url: &str) -> SheetRow {
        SheetRow {
            email: email.to_string(),
            image_url: url.to_string(),
        }
    }

    #[test]
    fn from_cells_extracts_email_and_url_columns() {
        let cells = cells(&[
            "2024-01-01 10:00",
            "alice@example.com",
            "Alice",
            "yes",
            "https://drive.google.com/open?id=abc",
        ]);
        let row = SheetRow::from_cells(&cells).unwrap();
        assert_eq!(row.email, "alice@example.com");
        assert_eq!(row.image_url, "https://drive.google.com/open?id=abc");
    }

    #[test]
    fn from_cells_drops_short_rows() {
        assert!(SheetRow::from_cells(&cells(&[])).is_none());
        assert!(SheetRow::from_cells(&cells(&["ts", "alice@example.com"])).is_none());
        assert!(SheetRow::from_cells(&cells(&["ts", "alice@example.com", "Alice", "yes"])).is_none());
    }

    #[test]
    fn from_cells_drops_blank_email_or_url() {
        assert!(SheetRow::from_cells(&cells(&["ts", "  ", "Alice", "yes", "url"])).is_none());
        assert!(SheetRow::from_cells(&cells(&["ts", "alice@example.com", "Alice", "yes", ""])).is_none());
    }

    #[test]
    fn index_joins_on_email() {
        let rows = vec![
            row("alice@example.com", "url-a"),
            row("bob@example.com", "url-b"),
        ];
        let index = index_by_email(&rows);
        assert_eq!(index.get("alice@example.com").map(String::as_str), Some("url-a"));
        assert_eq!(index.get("bob@example.com").map(String::as_str), Some("url-b"));
        assert!(index.get("carol@example.com").is_none());
    }

    #[test]
    fn first_row_wins_for_duplicate_emails() {
        let rows = vec![
            row("alice@example.com", "url-first"),
            row("alice@example.com", "url-second"),
        ];
        let index = index_by_email(&rows);
        assert_eq!(
            index.get("alice@example.com").map(String::as_str),
            Some("url-first")
        );
    }

    #[test]
    fn positional_pairing_diverges_under_reordering() {
        // The defect the email join replaces: zipping guests against rows by
        // position mismatches as soon as the row order differs from the
        // guest insertion order.
        let guests = ["alice@example.com", "bob@example.com"];
        let rows = vec![
            row("bob@example.com", "url-b"),
            row("alice@example.com", "url-a"),
        ];

        let positional: Vec<&str> = rows.iter().map(|r| r.image_url.as_str()).collect();
        assert_eq!(positional[0], "url-b", "position 0 pairs Alice with Bob's photo");

        let index = index_by_email(&rows);
        assert_eq!(index.get(guests[0]).map(String::as_str), Some("url-a"));
        assert_eq!(index.get(guests[1]).map(String::as_str), Some("url-b"));
    }
}
