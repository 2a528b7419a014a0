/// Markdown report rendering
///
/// Rendering is pure: the date is passed in, so the same records and date
/// always produce the same document.
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

use crate::models::MediaRecord;

const WEEKDAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// Star tier shown next to a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    /// 9.0 and above
    Excellent,
    /// 8.0 and above
    Great,
    Good,
}

impl RatingTier {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 9.0 {
            RatingTier::Excellent
        } else if rating >= 8.0 {
            RatingTier::Great
        } else {
            RatingTier::Good
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            RatingTier::Excellent => "⭐⭐⭐",
            RatingTier::Great => "⭐⭐",
            RatingTier::Good => "⭐",
        }
    }
}

/// Localized weekday name, Monday first
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Title used for the push message
pub fn report_title(date: NaiveDate) -> String {
    format!("📺 每日影视推荐 {}", date.format("%Y-%m-%d"))
}

fn write_section(message: &mut String, heading: &str, records: &[MediaRecord]) {
    // Writing into a String cannot fail
    let _ = write!(message, "## {}\n\n", heading);

    for (i, record) in records.iter().enumerate() {
        let _ = write!(
            message,
            "### {}. [{}]({})\n\n\
             {} **评分 **: {:.1}/10\n\
             📅 **年份 **: {}\n\
             🎭 **类型 **: {}\n\
             🎬 **导演 **: {}\n\
             👥 **主演 **: {}\n\n\
             ---\n\n",
            i + 1,
            record.title,
            record.url,
            RatingTier::from_rating(record.rating).stars(),
            record.rating,
            record.year,
            record.genres,
            record.directors,
            record.casts,
        );
    }
}

/// Renders the TV and movie listings into the daily Markdown report
pub fn format_report(tv: &[MediaRecord], movies: &[MediaRecord], date: NaiveDate) -> String {
    let mut message = format!(
        "# 📺 每日影视推荐\n\n\
         > **{} {}**\n\
         > 数据来源：豆瓣电影\n\n\
         ---\n\n",
        date.format("%Y年%m月%d日"),
        weekday_name(date),
    );

    write_section(&mut message, "🔥 热门电视剧 TOP5", tv);
    write_section(&mut message, "🎬 热门电影 TOP5", movies);

    message.push_str(
        "\n---\n\n\
         💡 **温馨提示**\n\
         > 每天早上10点准时推送\n\
         > 点击电影名称可直接跳转豆瓣查看详情\n\n\
         *本推荐由AI自动生成，数据仅供参考*\n",
    );

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback::{classic_movies, classic_tv_shows};

    fn date() -> NaiveDate {
        // A Friday
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn record(title: &str, rating: f64) -> MediaRecord {
        MediaRecord::new(
            title,
            rating,
            "2024",
            "剧情",
            "导演",
            "演员甲, 演员乙",
            "https://movie.douban.com/subject/1/",
        )
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(RatingTier::from_rating(9.5).stars(), "⭐⭐⭐");
        assert_eq!(RatingTier::from_rating(8.2).stars(), "⭐⭐");
        assert_eq!(RatingTier::from_rating(5.0).stars(), "⭐");
    }

    #[test]
    fn test_rating_tier_boundaries() {
        assert_eq!(RatingTier::from_rating(9.0), RatingTier::Excellent);
        assert_eq!(RatingTier::from_rating(8.99), RatingTier::Great);
        assert_eq!(RatingTier::from_rating(8.0), RatingTier::Great);
        assert_eq!(RatingTier::from_rating(7.99), RatingTier::Good);
        assert_eq!(RatingTier::from_rating(0.0), RatingTier::Good);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(date()), "周五");
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()), "周日");
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()), "周一");
    }

    #[test]
    fn test_report_title() {
        assert_eq!(report_title(date()), "📺 每日影视推荐 2024-03-15");
    }

    #[test]
    fn test_header() {
        let report = format_report(&[], &[], date());
        assert!(report.starts_with("# 📺 每日影视推荐\n\n> **2024年03月15日 周五**\n> 数据来源：豆瓣电影\n"));
    }

    #[test]
    fn test_record_block() {
        let report = format_report(&[record("漫长的季节", 9.4)], &[], date());

        let expected = "### 1. [漫长的季节](https://movie.douban.com/subject/1/)\n\n\
                        ⭐⭐⭐ **评分 **: 9.4/10\n\
                        📅 **年份 **: 2024\n\
                        🎭 **类型 **: 剧情\n\
                        🎬 **导演 **: 导演\n\
                        👥 **主演 **: 演员甲, 演员乙\n\n\
                        ---\n\n";
        assert!(report.contains(expected));
    }

    #[test]
    fn test_sections_are_numbered_independently() {
        let report = format_report(
            &[record("剧一", 8.0), record("剧二", 7.0)],
            &[record("影一", 9.0)],
            date(),
        );

        let tv_at = report.find("## 🔥 热门电视剧 TOP5").unwrap();
        let movie_at = report.find("## 🎬 热门电影 TOP5").unwrap();
        assert!(tv_at < movie_at);
        assert!(report.contains("### 2. [剧二]"));
        assert!(report[movie_at..].contains("### 1. [影一]"));
    }

    #[test]
    fn test_whole_number_rating_keeps_decimal() {
        let report = format_report(&[], &[record("三体", 8.0)], date());
        assert!(report.contains("⭐⭐ **评分 **: 8.0/10"));
    }

    #[test]
    fn test_closing_notice() {
        let report = format_report(&[], &[], date());
        assert!(report.ends_with("*本推荐由AI自动生成，数据仅供参考*\n"));
        assert!(report.contains("💡 **温馨提示**"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let first = format_report(&classic_tv_shows(), &classic_movies(), date());
        let second = format_report(&classic_tv_shows(), &classic_movies(), date());
        assert_eq!(first, second);
        assert_eq!(first.matches("### ").count(), 10);
    }
}
