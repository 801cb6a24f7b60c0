//! Plain-text rendering of records

use brcms_common::editor::{Record, UserRow};
use brcms_common::models::{DataUri, GalleryImage, Performance, Track};
use brcms_common::public::{format_performance_date, DateStyle};

/// One-line summary in a management list
pub trait Listing: Record {
    fn summary(&self) -> String;
}

impl Listing for Performance {
    fn summary(&self) -> String {
        let mut line = format!(
            "{}  {}  {}",
            self.id,
            format_performance_date(self, DateStyle::Manage),
            self.venue
        );
        if let Some(description) = &self.description {
            line.push_str(&format!(" ({})", description));
        }
        line.push_str(&asset_marker(self.image.as_ref()));
        line
    }
}

impl Listing for Track {
    fn summary(&self) -> String {
        format!(
            "{}  {} - {}{}",
            self.id,
            self.title,
            self.artist,
            asset_marker(self.file.as_ref())
        )
    }
}

impl Listing for GalleryImage {
    fn summary(&self) -> String {
        format!("{}  {}{}", self.id, self.caption, asset_marker(self.file.as_ref()))
    }
}

fn asset_marker(asset: Option<&DataUri>) -> String {
    asset
        .map(|uri| format!(" [{}]", uri.media_type()))
        .unwrap_or_default()
}

/// Landing-page lines for one performance
pub fn public_performance(gig: &Performance) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}",
        format_performance_date(gig, DateStyle::Public),
        gig.venue
    )];
    if let Some(description) = &gig.description {
        lines.push(format!("    {}", description));
    }
    lines
}

pub fn public_track(track: &Track) -> String {
    format!("{} - {}", track.title, track.artist)
}

pub fn user_row(row: &UserRow) -> String {
    let mut line = format!("{}  {}  {}", row.id, row.username, row.role);
    if row.protected {
        line.push_str("  (geschützt)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gig(date: &str, description: Option<&str>) -> Performance {
        Performance {
            id: 1714521600000,
            date: date.into(),
            venue: "Kulturhaus".into(),
            description: description.map(String::from),
            image: None,
        }
    }

    #[test]
    fn test_performance_summary_uses_manage_style() {
        assert_eq!(
            gig("2024-05-01", None).summary(),
            "1714521600000  1. Mai 2024  Kulturhaus"
        );
    }

    #[test]
    fn test_performance_summary_with_description_and_image() {
        let mut gig = gig("2024-05-01", Some("Open Air"));
        gig.image = Some(DataUri::with_media_type("image/png", b"png"));

        assert_eq!(
            gig.summary(),
            "1714521600000  1. Mai 2024  Kulturhaus (Open Air) [image/png]"
        );
    }

    #[test]
    fn test_public_performance_keeps_invalid_date_verbatim() {
        let lines = public_performance(&gig("demnächst", Some("Tba")));
        assert_eq!(lines, vec!["demnächst  Kulturhaus", "    Tba"]);
    }

    #[test]
    fn test_user_row_marks_protected() {
        let row = UserRow {
            id: 1,
            username: "admin".into(),
            role: "ADMIN".into(),
            protected: true,
        };
        assert_eq!(user_row(&row), "1  admin  ADMIN  (geschützt)");
    }
}
