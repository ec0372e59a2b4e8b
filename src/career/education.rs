//! Education levels, the career table and the choices built on them

use crate::character::Character;
use crate::error::{KowLifeError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Salary range for a newly chosen career, in dollars per year
pub const SALARY_MIN: u32 = 30_000;
pub const SALARY_MAX: u32 = 80_000;

/// Age at which elementary school starts automatically
pub const ELEMENTARY_SCHOOL_AGE: u32 = 6;
/// Age at which high school starts automatically
pub const HIGH_SCHOOL_AGE: u32 = 14;

/// Education level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Education {
    ElementarySchool,
    HighSchool,
    CommunityCollege,
    University,
    GraduateSchool,
}

impl Education {
    /// Levels the player can pick, in menu order
    pub const SELECTABLE: [Education; 4] = [
        Education::HighSchool,
        Education::CommunityCollege,
        Education::University,
        Education::GraduateSchool,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Education::ElementarySchool => "Elementary School",
            Education::HighSchool => "High School",
            Education::CommunityCollege => "Community College",
            Education::University => "University",
            Education::GraduateSchool => "Graduate School",
        }
    }

    /// Jobs open to someone whose latest education is `self`
    pub fn careers(self) -> &'static [&'static str] {
        match self {
            Education::ElementarySchool | Education::HighSchool => &[],
            Education::CommunityCollege => &[
                "Retail Worker",
                "Office Assistant",
                "Technician",
                "Sales Representative",
                "Nurse",
            ],
            Education::University => &[
                "Software Engineer",
                "Doctor",
                "Lawyer",
                "Teacher",
                "Accountant",
                "Scientist",
            ],
            Education::GraduateSchool => &[
                "Surgeon",
                "University Professor",
                "Research Scientist",
                "Corporate Lawyer",
                "Specialized Consultant",
            ],
        }
    }

    /// School milestone reached at exactly `age`, if any
    pub fn milestone_at(age: u32) -> Option<Education> {
        match age {
            ELEMENTARY_SCHOOL_AGE => Some(Education::ElementarySchool),
            HIGH_SCHOOL_AGE => Some(Education::HighSchool),
            _ => None,
        }
    }

    /// Whether reaching this milestone adds it to `character`'s education.
    ///
    /// Elementary school is only announced. High school is recorded unless
    /// the character already holds a level at or above it, so a milestone
    /// never becomes the latest level over a higher chosen one.
    pub fn records_milestone(self, character: &Character) -> bool {
        self != Education::ElementarySchool
            && character.education.iter().all(|&taken| taken < self)
    }

    /// Announcement text for a school milestone
    pub fn milestone_text(self) -> &'static str {
        match self {
            Education::ElementarySchool => "You started elementary school!",
            Education::HighSchool => "You entered high school!",
            Education::CommunityCollege => "You enrolled in community college!",
            Education::University => "You enrolled in university!",
            Education::GraduateSchool => "You enrolled in graduate school!",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Education {
    type Err = KowLifeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        [
            Education::ElementarySchool,
            Education::HighSchool,
            Education::CommunityCollege,
            Education::University,
            Education::GraduateSchool,
        ]
        .into_iter()
        .find(|level| level.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| KowLifeError::EducationUnavailable(format!("unknown education: {}", wanted)))
    }
}

/// Current job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub job: String,
    pub salary: u32,
}

/// Selectable levels the character has not taken yet
pub fn available_education(character: &Character) -> Vec<Education> {
    Education::SELECTABLE
        .iter()
        .copied()
        .filter(|level| !character.education.contains(level))
        .collect()
}

/// Record a new education level on a copy of `character`
pub fn choose_education(character: &Character, level: Education) -> Result<Character> {
    if !Education::SELECTABLE.contains(&level) {
        return Err(KowLifeError::EducationUnavailable(format!(
            "{} cannot be chosen",
            level
        )));
    }
    if character.education.contains(&level) {
        return Err(KowLifeError::EducationUnavailable(format!(
            "{} already completed",
            level
        )));
    }

    let mut next = character.clone();
    next.education.push(level);
    log::debug!("{} chose {}", next.name, level);
    Ok(next)
}

/// Jobs open to the character given their latest education
pub fn available_careers(character: &Character) -> &'static [&'static str] {
    character
        .latest_education()
        .map(Education::careers)
        .unwrap_or(&[])
}

/// Start a career on a copy of `character` with a random salary
pub fn choose_career<R: Rng + ?Sized>(
    character: &Character,
    job: &str,
    rng: &mut R,
) -> Result<Character> {
    let careers = available_careers(character);
    let Some(&job) = careers.iter().find(|c| c.eq_ignore_ascii_case(job.trim())) else {
        let education = character
            .latest_education()
            .map(|e| e.label())
            .unwrap_or("no education");
        return Err(KowLifeError::CareerUnavailable(format!(
            "{} is not open with {}",
            job, education
        )));
    };

    let salary = rng.gen_range(SALARY_MIN..SALARY_MAX);
    let mut next = character.clone();
    next.career = Some(Career {
        job: job.to_string(),
        salary,
    });
    log::debug!("{} became a {} earning ${}", next.name, job, salary);
    Ok(next)
}
