//! # Portfolio Content
//!
//! Everything the page says. The built-in [`Portfolio::default`] is the
//! stock content; a TOML file with the same shape can replace it
//! (see `general.content_file` in the config).
//!
//! ```text
//! Portfolio
//! ├── name, role, tagline, subline
//! ├── about: Vec<String>           // paragraphs
//! ├── highlights: Vec<Highlight>   // label/value cards
//! ├── expertise: Vec<ExpertiseArea>
//! ├── principles: Vec<Principle>
//! └── contact: Contact
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpertiseArea {
    pub number: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Principle {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Contact {
    pub headline: String,
    pub blurb: String,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Portfolio {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub subline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub expertise: Vec<ExpertiseArea>,
    #[serde(default)]
    pub principles: Vec<Principle>,
    #[serde(default)]
    pub contact: Contact,
}

/// Hero phrase for content that names nothing at all.
const FALLBACK_PHRASE: &str = "Hello";

/// One outcome, tagged with the expertise area it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story<'a> {
    pub area_index: usize,
    pub area_title: &'a str,
    pub text: &'a str,
}

/// A numeric stat derived from the content, shown as a count-up counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
}

impl Portfolio {
    /// Initials of the owner's name, e.g. "MC".
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// All outcomes across expertise areas, in page order.
    pub fn stories(&self) -> Vec<Story<'_>> {
        self.expertise
            .iter()
            .enumerate()
            .flat_map(|(area_index, area)| {
                area.outcomes.iter().map(move |text| Story {
                    area_index,
                    area_title: area.title.as_str(),
                    text: text.as_str(),
                })
            })
            .collect()
    }

    pub fn stats(&self) -> Vec<Stat> {
        let skills: usize = self.expertise.iter().map(|a| a.skills.len()).sum();
        let outcomes: usize = self.expertise.iter().map(|a| a.outcomes.len()).sum();
        vec![
            Stat {
                label: "Expertise Areas",
                target: self.expertise.len() as u32,
            },
            Stat {
                label: "Outcomes Delivered",
                target: outcomes as u32,
            },
            Stat {
                label: "Core Skills",
                target: skills as u32,
            },
            Stat {
                label: "Guiding Principles",
                target: self.principles.len() as u32,
            },
        ]
    }

    /// Default hero phrases: the subline's comma-separated specialties.
    ///
    /// Without a usable subline, falls back to the expertise titles, then the
    /// first non-empty of role, tagline and name. Never empty.
    pub fn default_phrases(&self) -> Vec<String> {
        let list = self
            .subline
            .trim_start_matches("Specializing in ")
            .trim_end_matches('.');
        let from_subline: Vec<String> = list
            .split(',')
            .map(|s| s.trim().trim_start_matches("and ").trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if !from_subline.is_empty() {
            return from_subline;
        }

        let titles: Vec<String> = self
            .expertise
            .iter()
            .map(|a| a.title.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if !titles.is_empty() {
            return titles;
        }

        let fallback = [&self.role, &self.tagline, &self.name]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or(FALLBACK_PHRASE);
        vec![fallback.to_string()]
    }
}

/// Load a portfolio from a TOML file.
pub fn load_content(path: &Path) -> Result<Portfolio, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let portfolio: Portfolio = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!(
        "Loaded content from {} ({} expertise areas)",
        path.display(),
        portfolio.expertise.len()
    );
    Ok(portfolio)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Muralish Clinton".to_string(),
            role: "Strategic Technology Leader".to_string(),
            tagline: "I build high-performance engineering teams and platforms from the ground up, \
                transforming how organizations ship software."
                .to_string(),
            subline: "Specializing in Ruby on Rails team building, platform engineering, \
                and developer efficiency at scale."
                .to_string(),
            about: strings(&[
                "As a strategic technology leader, I have a proven track record of building \
                 engineering teams and platforms from scratch. My approach combines deep technical \
                 expertise with a keen understanding of business objectives, ensuring that every \
                 team I build and every platform I architect directly drives organizational success.",
                "I thrive in environments where there is ambiguity and complexity. Whether it's \
                 assembling a Ruby on Rails team to deliver critical products, designing platform \
                 engineering organizations, or systematically improving developer productivity, \
                 I bring a structured, outcome-focused methodology to every challenge.",
                "My leadership philosophy centers on empowering engineers, creating scalable \
                 processes, and fostering a culture of continuous improvement that compounds \
                 over time.",
            ]),
            highlights: vec![
                Highlight { label: "Teams Built".into(), value: "Multiple".into() },
                Highlight { label: "Focus".into(), value: "0 to 1".into() },
                Highlight { label: "Impact".into(), value: "Measurable".into() },
                Highlight { label: "Approach".into(), value: "Strategic".into() },
            ],
            expertise: vec![
                ExpertiseArea {
                    number: "01".into(),
                    title: "Building a Ruby on Rails Team".into(),
                    subtitle: "From Zero to a High-Performing Product Team".into(),
                    description: "Built a Ruby on Rails engineering team from scratch, establishing \
                        the hiring pipeline, technical standards, and delivery cadence needed to ship \
                        production-grade applications. This involved defining role competencies, \
                        structuring interviews for Rails-specific depth, and creating an onboarding \
                        program that accelerated time-to-first-commit."
                        .into(),
                    focus_areas: strings(&[
                        "Talent strategy and hiring pipeline for Rails engineers",
                        "Establishing coding standards, review processes, and best practices",
                        "Sprint cadence, delivery workflows, and agile ceremonies",
                        "Security, testing culture, and production readiness",
                    ]),
                    outcomes: strings(&[
                        "Assembled a productive Rails team capable of full-cycle delivery",
                        "Reduced average onboarding time with structured ramp-up programs",
                        "Established a consistent deployment rhythm with reliable releases",
                        "Created a reusable playbook for standing up framework-specific teams",
                    ]),
                    skills: strings(&[
                        "Ruby on Rails",
                        "Team Building",
                        "Talent Strategy",
                        "Technical Hiring",
                        "Agile Delivery",
                        "Code Quality",
                    ]),
                },
                ExpertiseArea {
                    number: "02".into(),
                    title: "Building a Platform Engineering Team".into(),
                    subtitle: "Designing the Foundation for Developer Productivity".into(),
                    description: "Designed and built a platform engineering team responsible for \
                        creating the internal developer platform (IDP) that serves as the backbone of \
                        engineering operations. This involved defining the team's charter, selecting \
                        the technology stack, establishing service level objectives, and building the \
                        abstractions that allow product teams to ship independently and safely."
                        .into(),
                    focus_areas: strings(&[
                        "Internal developer platform (IDP) design and architecture",
                        "CI/CD pipeline standardization and automation",
                        "Infrastructure-as-code, observability, and reliability",
                        "Self-service tooling and golden paths for product teams",
                    ]),
                    outcomes: strings(&[
                        "Launched an internal platform serving multiple product teams",
                        "Significantly reduced infrastructure provisioning time through self-service",
                        "Improved system reliability with standardized observability practices",
                        "Enabled product teams to deploy independently without platform bottlenecks",
                    ]),
                    skills: strings(&[
                        "Platform Engineering",
                        "IDP Design",
                        "Infrastructure as Code",
                        "CI/CD",
                        "Observability",
                        "Cloud Architecture",
                    ]),
                },
                ExpertiseArea {
                    number: "03".into(),
                    title: "Improving Developer Efficiency".into(),
                    subtitle: "Systematic Approaches to Engineering Velocity".into(),
                    description: "Led organization-wide initiatives to measurably improve developer \
                        efficiency through data-driven analysis, tooling investments, and process \
                        optimization. This work focuses on identifying bottlenecks across the software \
                        development lifecycle, quantifying their impact, and implementing targeted \
                        improvements that compound over time."
                        .into(),
                    focus_areas: strings(&[
                        "DORA metrics tracking and engineering analytics",
                        "Build time optimization and feedback loop compression",
                        "Developer experience (DX) improvements and friction reduction",
                        "Continuous improvement culture and knowledge sharing",
                    ]),
                    outcomes: strings(&[
                        "Measurably improved deployment frequency and lead time for changes",
                        "Reduced build and test cycle times through targeted optimizations",
                        "Implemented developer experience surveys and acted on feedback loops",
                        "Built a culture of continuous improvement with visible, shared metrics",
                    ]),
                    skills: strings(&[
                        "DORA Metrics",
                        "Developer Experience",
                        "Process Optimization",
                        "Engineering Analytics",
                        "Build Systems",
                        "Change Management",
                    ]),
                },
            ],
            principles: vec![
                Principle {
                    title: "Start with Why".into(),
                    description: "Every team and platform decision ties back to a clear business \
                        objective. I ensure alignment between engineering investment and \
                        organizational goals before writing a single line of code."
                        .into(),
                },
                Principle {
                    title: "Hire for Trajectory".into(),
                    description: "I prioritize growth mindset and foundational skills over perfect \
                        resume matches. The best teams are built with people who learn fast, \
                        communicate well, and care about craft."
                        .into(),
                },
                Principle {
                    title: "Build in the Open".into(),
                    description: "Transparency in architecture decisions, sprint progress, and \
                        technical debt creates trust. I champion documentation, ADRs, and visible \
                        metrics as leadership tools."
                        .into(),
                },
                Principle {
                    title: "Measure What Matters".into(),
                    description: "From DORA metrics to developer satisfaction surveys, I use \
                        quantitative and qualitative data to guide decisions and demonstrate impact \
                        to stakeholders."
                        .into(),
                },
            ],
            contact: Contact {
                headline: "Let's Work Together".into(),
                blurb: "Whether you need to build an engineering team, stand up a platform \
                    organization, or improve your team's velocity, I'd love to hear about your \
                    challenges."
                    .into(),
                email: Some("muralish.clinton@example.com".into()),
                linkedin: Some("https://linkedin.com".into()),
                github: Some("https://github.com".into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::typing::{TypingConfig, TypingEffect};

    #[test]
    fn test_monogram() {
        assert_eq!(Portfolio::default().monogram(), "MC");
    }

    #[test]
    fn test_default_phrases_from_subline() {
        let phrases = Portfolio::default().default_phrases();
        assert_eq!(
            phrases,
            [
                "Ruby on Rails team building",
                "platform engineering",
                "developer efficiency at scale"
            ]
        );
    }

    #[test]
    fn test_stories_are_tagged_by_area() {
        let p = Portfolio::default();
        let stories = p.stories();
        assert_eq!(stories.len(), 12);
        assert_eq!(stories[0].area_index, 0);
        assert_eq!(stories[4].area_index, 1);
        assert_eq!(stories[11].area_title, "Improving Developer Efficiency");
    }

    #[test]
    fn test_stats_count_content() {
        let stats = Portfolio::default().stats();
        let targets: Vec<u32> = stats.iter().map(|s| s.target).collect();
        assert_eq!(targets, [3, 12, 18, 4]);
    }

    #[test]
    fn test_sparse_toml_content() {
        let toml_str = r#"
name = "Ada Lovelace"
role = "Analyst"
tagline = "Notes on the engine."

[[expertise]]
number = "01"
title = "Programs"
subtitle = "The first ones"
description = "Bernoulli numbers."
"#;
        let p: Portfolio = toml::from_str(toml_str).unwrap();
        assert_eq!(p.monogram(), "AL");
        assert!(p.about.is_empty());
        assert!(p.expertise[0].outcomes.is_empty());
        assert!(p.contact.email.is_none());
        assert_eq!(p.default_phrases(), ["Programs"]);
    }

    #[test]
    fn test_phrases_without_subline_or_expertise_use_role() {
        let toml_str = r#"
name = "Ada Lovelace"
role = "Analyst"
tagline = "Notes on the engine."
"#;
        let p: Portfolio = toml::from_str(toml_str).unwrap();
        assert_eq!(p.default_phrases(), ["Analyst"]);
    }

    #[test]
    fn test_phrases_skip_blank_fields() {
        let toml_str = r#"
name = "Ada Lovelace"
role = " "
tagline = ""
"#;
        let p: Portfolio = toml::from_str(toml_str).unwrap();
        assert_eq!(p.default_phrases(), ["Ada Lovelace"]);

        let blank = Portfolio {
            name: String::new(),
            role: String::new(),
            tagline: String::new(),
            subline: "Specializing in .".to_string(),
            expertise: Vec::new(),
            ..Portfolio::default()
        };
        assert_eq!(blank.default_phrases(), [FALLBACK_PHRASE]);
    }

    #[test]
    fn test_content_without_subline_builds_typing_effect() {
        let toml_str = r#"
name = "Ada Lovelace"
role = "Analyst"
tagline = "Notes on the engine."
"#;
        let p: Portfolio = toml::from_str(toml_str).unwrap();
        let config = TypingConfig::from_millis(10, 10, 100);
        let effect = TypingEffect::new(p.default_phrases(), config);
        assert!(effect.is_ok());
    }
}
