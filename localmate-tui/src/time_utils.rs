use time::PrimitiveDateTime;

use crate::i18n::Lang;

const GREGORIAN_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]/[month]/[day] [hour]:[minute]");

/// Format a due date for display in the active language. English uses the
/// Gregorian calendar; Persian uses the Jalali (Shamsi) calendar, same
/// `YYYY/MM/DD HH:mm` shape.
pub fn format_due(dt: PrimitiveDateTime, lang: Lang) -> String {
    match lang {
        Lang::En => dt.format(&GREGORIAN_FORMAT).unwrap_or_default(),
        Lang::Fa => {
            let (jy, jm, jd) = to_jalali(dt.year(), dt.month() as u8, dt.day());
            format!(
                "{:04}/{:02}/{:02} {:02}:{:02}",
                jy,
                jm,
                jd,
                dt.hour(),
                dt.minute()
            )
        }
    }
}

/// Gregorian to Jalali civil-date conversion (jalaali-js arithmetic). Valid
/// for the proleptic range this client ever displays.
fn to_jalali(gy: i32, gm: u8, gd: u8) -> (i32, u8, u8) {
    const G_DAYS_IN_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy2 = i64::from(if gm > 2 { gy + 1 } else { gy });
    let mut days: i64 = 355_666
        + 365 * i64::from(gy)
        + (gy2 + 3) / 4
        - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + i64::from(gd)
        + G_DAYS_IN_MONTH[usize::from(gm - 1)];

    let mut jy = -1595 + 33 * (days / 12053);
    days %= 12053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };
    (jy as i32, jm as u8, jd as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn english_renders_gregorian() {
        let due = datetime!(2024-03-20 09:30:00);
        assert_eq!(format_due(due, Lang::En), "2024/03/20 09:30");
    }

    #[test]
    fn persian_renders_jalali() {
        // Nowruz 2024: 2024-03-20 is 1403/01/01.
        let due = datetime!(2024-03-20 09:30:00);
        assert_eq!(format_due(due, Lang::Fa), "1403/01/01 09:30");

        // Mid-year on the 30-day month side of the Jalali calendar.
        let due = datetime!(2025-01-01 18:05:00);
        assert_eq!(format_due(due, Lang::Fa), "1403/10/12 18:05");
    }

    #[test]
    fn jalali_conversion_handles_leap_years() {
        // 1403 is a Jalali leap year; its last day maps to 2025-03-20.
        assert_eq!(to_jalali(2025, 3, 20), (1403, 12, 30));
        assert_eq!(to_jalali(2025, 3, 21), (1404, 1, 1));
    }
}
