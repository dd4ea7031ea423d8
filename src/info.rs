use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, author, etc
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, usually a comma separated list
    pub keywords: Option<String>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(Local::now().fixed_offset()));
    }
}

/// Dates carry the UTC offset as signed hours plus unsigned minutes, which
/// can't express a negative offset under an hour. Those are rounded to the
/// nearest whole hour, half hours away from UTC.
fn pdf_date(now: DateTime<FixedOffset>) -> PDate {
    let offset = now.offset().local_minus_utc();
    let (offset_hours, offset_minutes) = if offset < 0 && offset > -60 * 60 {
        ((offset as f64 / 3600.0).round() as i32, 0)
    } else {
        let hours = offset / (60 * 60);
        (hours, ((offset - hours * 60 * 60) / 60).abs())
    };
    PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain() {
        let mut info = Info::new();
        info.title("voyager overlay").keywords("hp, overlay");
        assert_eq!(info.title.as_deref(), Some("voyager overlay"));
        assert_eq!(info.keywords.as_deref(), Some("hp, overlay"));
        assert_eq!(info.subject, None);
    }

    #[test]
    fn negative_offsets_keep_positive_minutes() {
        let now = DateTime::parse_from_rfc3339("2023-03-14T15:09:26-03:30").expect("valid date");
        let expected = PDate::new(2023)
            .month(3)
            .day(14)
            .hour(15)
            .minute(9)
            .second(26)
            .utc_offset_hour(-3)
            .utc_offset_minute(30);
        assert_eq!(pdf_date(now), expected);
    }

    #[test]
    fn negative_offsets_under_an_hour_round_to_whole_hours() {
        let date = |offset: &str| {
            pdf_date(
                DateTime::parse_from_rfc3339(&format!("2023-03-14T15:09:26{offset}"))
                    .expect("valid date"),
            )
        };
        let at = |hour: i8, minute: u8| {
            PDate::new(2023)
                .month(3)
                .day(14)
                .hour(15)
                .minute(9)
                .second(26)
                .utc_offset_hour(hour)
                .utc_offset_minute(minute)
        };

        assert_eq!(date("-00:30"), at(-1, 0));
        assert_eq!(date("-00:45"), at(-1, 0));
        assert_eq!(date("-00:15"), at(0, 0));
        assert_ne!(date("-00:30"), date("+00:30"));
        assert_eq!(date("+00:30"), at(0, 30));
    }
}
