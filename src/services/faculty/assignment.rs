//! 教师班级/科目/时间表分配
//!
//! 入职时按专业方向随机指派，不做跨教师的冲突检测。策略抽象成
//! trait，之后接入真正的排课器时不需要动数据模型。

use rand::Rng;

use crate::errors::{AttendanceSystemError, Result};
use crate::models::faculty::entities::{Schedule, Specialization, TeachingAssignment};

const SCIENCE_SUBJECTS: &[&str] = &[
    "Physics",
    "Chemistry",
    "Biology",
    "Mathematics",
    "Computer Science",
];
const ARTS_SUBJECTS: &[&str] = &["English", "Urdu", "History", "Geography", "Drawing", "Music"];
const COMMERCE_SUBJECTS: &[&str] = &["Accounting", "Economics", "Business Studies", "Statistics"];
const OTHER_SUBJECTS: &[&str] = &["Physical Education", "Islamic Studies", "Pakistan Studies"];

const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// 课时长度（分钟）
const LESSON_MINUTES: i64 = 90;

/// 指派策略：给定专业方向，产出班级、科目与时间表
pub trait AssignmentPolicy: Send + Sync {
    fn assign(&self, specialization: Specialization) -> Result<TeachingAssignment>;
}

/// 随机指派（占位策略，非排课优化器）
pub struct RandomAssignmentPolicy;

impl AssignmentPolicy for RandomAssignmentPolicy {
    fn assign(&self, specialization: Specialization) -> Result<TeachingAssignment> {
        assign_with_rng(specialization, &mut rand::rng())
    }
}

/// 专业方向对应的科目池
pub fn subject_pool(specialization: Specialization) -> &'static [&'static str] {
    match specialization {
        Specialization::Science => SCIENCE_SUBJECTS,
        Specialization::Arts => ARTS_SUBJECTS,
        Specialization::Commerce => COMMERCE_SUBJECTS,
        Specialization::Other => OTHER_SUBJECTS,
    }
}

/// 用外部传入的随机源做指派，便于测试
pub fn assign_with_rng<R: Rng + ?Sized>(
    specialization: Specialization,
    rng: &mut R,
) -> Result<TeachingAssignment> {
    // 班级：1-10 均匀
    let assigned_class = rng.random_range(1..=10);

    // 科目：按专业方向的池均匀
    let pool = subject_pool(specialization);
    let assigned_subject = pool[rng.random_range(0..pool.len())].to_string();

    // 开始时间：整点或半点，8:00 - 14:30
    let hour = rng.random_range(8..=14u32);
    let minute = if rng.random_bool(0.5) { 0 } else { 30 };
    let start_time = format_time_12h(hour, minute);
    let end_time = calculate_end_time(&start_time)?;

    // 上课日：从周一到周五不放回地抽 2-5 天，按抽取顺序拼接
    let num_days = rng.random_range(2..=5usize);
    let mut selected: Vec<&str> = Vec::with_capacity(num_days);
    while selected.len() < num_days {
        let day = WEEKDAYS[rng.random_range(0..WEEKDAYS.len())];
        if !selected.contains(&day) {
            selected.push(day);
        }
    }

    Ok(TeachingAssignment {
        assigned_class,
        assigned_subject,
        schedule: Schedule {
            days: selected.join(", "),
            time: format!("{start_time} - {end_time}"),
        },
    })
}

/// 24 小时的时/分编码为 12 小时制显示串
fn format_time_12h(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {period}")
}

/// 结束时间 = 开始时间 + 90 分钟
///
/// 内部用 24 小时算术（mod 24 处理跨天），再编码回 12 小时制。
/// 开始时间只会落在整点或半点，因此结束分钟按
/// `total_minutes % 60 == 0` 二分为 "00" / "30"。
pub fn calculate_end_time(start_time: &str) -> Result<String> {
    let (time, period) = start_time.split_once(' ').ok_or_else(|| {
        AttendanceSystemError::validation(format!("无效的开始时间: {start_time}"))
    })?;
    let (h, m) = time.split_once(':').ok_or_else(|| {
        AttendanceSystemError::validation(format!("无效的开始时间: {start_time}"))
    })?;

    let mut hour: i64 = h.parse().map_err(|_| {
        AttendanceSystemError::validation(format!("无效的开始时间: {start_time}"))
    })?;
    let minute: i64 = m.parse().map_err(|_| {
        AttendanceSystemError::validation(format!("无效的开始时间: {start_time}"))
    })?;

    match period {
        "PM" if hour != 12 => hour += 12,
        "AM" if hour == 12 => hour = 0,
        "AM" | "PM" => {}
        _ => {
            return Err(AttendanceSystemError::validation(format!(
                "无效的开始时间: {start_time}"
            )));
        }
    }

    let total_minutes = hour * 60 + minute + LESSON_MINUTES;
    let end_hour_24 = (total_minutes / 60) % 24;

    let end_period = if end_hour_24 >= 12 { "PM" } else { "AM" };
    let end_hour = match end_hour_24 % 12 {
        0 => 12,
        h => h,
    };
    let end_minute = if total_minutes % 60 == 0 { "00" } else { "30" };

    Ok(format!("{end_hour}:{end_minute} {end_period}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_end_time_simple() {
        assert_eq!(calculate_end_time("8:00 AM").unwrap(), "9:30 AM");
        assert_eq!(calculate_end_time("9:30 AM").unwrap(), "11:00 AM");
    }

    #[test]
    fn test_end_time_crosses_noon() {
        assert_eq!(calculate_end_time("11:30 AM").unwrap(), "1:00 PM");
        assert_eq!(calculate_end_time("12:00 PM").unwrap(), "1:30 PM");
    }

    #[test]
    fn test_end_time_wraps_past_midnight() {
        assert_eq!(calculate_end_time("11:30 PM").unwrap(), "1:00 AM");
    }

    #[test]
    fn test_end_time_rejects_garbage() {
        assert!(calculate_end_time("not a time").is_err());
        assert!(calculate_end_time("8:00 XX").is_err());
        assert!(calculate_end_time("ab:cd AM").is_err());
    }

    #[test]
    fn test_subject_pools() {
        assert!(subject_pool(Specialization::Science).contains(&"Physics"));
        assert!(subject_pool(Specialization::Arts).contains(&"Urdu"));
        assert!(subject_pool(Specialization::Commerce).contains(&"Statistics"));
        assert!(subject_pool(Specialization::Other).contains(&"Physical Education"));
        assert!(!subject_pool(Specialization::Science).contains(&"Music"));
    }

    #[test]
    fn test_assignment_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for spec in [
            Specialization::Science,
            Specialization::Arts,
            Specialization::Commerce,
            Specialization::Other,
        ] {
            for _ in 0..100 {
                let assignment = assign_with_rng(spec, &mut rng).unwrap();

                assert!((1..=10).contains(&assignment.assigned_class));
                assert!(subject_pool(spec).contains(&assignment.assigned_subject.as_str()));

                let days: Vec<&str> = assignment.schedule.days.split(", ").collect();
                assert!((2..=5).contains(&days.len()));
                let mut unique = days.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), days.len(), "days must be distinct");
                for day in days {
                    assert!(WEEKDAYS.contains(&day));
                }

                // 时间表形如 "H:MM AM - H:MM PM"，结束 = 开始 + 90 分钟
                let (start, end) = assignment.schedule.time.split_once(" - ").unwrap();
                assert_eq!(calculate_end_time(start).unwrap(), end);
            }
        }
    }

    #[test]
    fn test_start_hour_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let assignment = assign_with_rng(Specialization::Science, &mut rng).unwrap();
            let (start, _) = assignment.schedule.time.split_once(" - ").unwrap();
            let (time, period) = start.split_once(' ').unwrap();
            let (h, m) = time.split_once(':').unwrap();
            let hour: u32 = h.parse().unwrap();
            let hour24 = match (period, hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                ("PM", h) => h + 12,
                _ => unreachable!(),
            };
            assert!((8..=14).contains(&hour24));
            assert!(m == "00" || m == "30");
        }
    }
}
