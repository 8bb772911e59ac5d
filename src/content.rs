//! Literal page content. Everything here is baked into the binary and never
//! changes while the page is open.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike};
use thiserror::Error;

pub const OWNER_FIRST_NAME: &str = "Sandeep";
pub const OWNER_EMAIL: &str = "sandeep.techit07@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStat {
    pub target: f64,
    pub decimals: u8,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_HEADING: [&str; 3] = ["Hi, I'm", "Sandeep", "Kotakondla"];

pub const HERO_TAGLINE: &str = "Crafting beautiful, responsive web experiences with modern JavaScript & design principles. Turning ideas into engaging digital solutions.";

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        target: 50.0,
        decimals: 0,
        suffix: "+",
        label: "Projects",
    },
    HeroStat {
        target: 20.0,
        decimals: 0,
        suffix: "+",
        label: "Happy Clients",
    },
    HeroStat {
        target: 1.3,
        decimals: 1,
        suffix: "+",
        label: "Years Exp.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_TAGS: [&str; 6] = [
    "React",
    "JavaScript",
    "HTML/CSS",
    "Framer Motion",
    "Tailwind CSS",
    "Web Design",
];

pub const ABOUT_STATS: [IconStat; 4] = [
    IconStat {
        icon: "🎯",
        value: "15+",
        label: "Projects Completed",
    },
    IconStat {
        icon: "😊",
        value: "10+",
        label: "Happy Clients",
    },
    IconStat {
        icon: "⭐",
        value: "4.8/5",
        label: "Average Rating",
    },
    IconStat {
        icon: "🚀",
        value: "1.3",
        label: "Years Experience",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERTISE_AREAS: [Card; 3] = [
    Card {
        icon: "⚛️",
        title: "Frontend Development",
        description: "Expert in React, TypeScript, and modern JavaScript frameworks. Building scalable and maintainable applications.",
    },
    Card {
        icon: "✨",
        title: "UI/UX Animation",
        description: "Specializing in creating smooth, delightful micro-interactions and animations using Framer Motion.",
    },
    Card {
        icon: "📱",
        title: "Responsive Design",
        description: "Mobile-first approach with Tailwind CSS. Ensuring perfect experience across all devices and screen sizes.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Tailwind gradient stops for the hover overlay.
    pub gradient: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        icon: "🛍️",
        title: "Animated E-Commerce Platform",
        description: "Full-stack React application with smooth product transitions, cart animations, and checkout flow. Increased conversion by 35%.",
        tags: &["React", "Framer Motion", "TypeScript", "Node.js"],
        gradient: "from-purple-600 to-blue-600",
    },
    Project {
        icon: "🎨",
        title: "Creative Agency Website",
        description: "Marketing website with scroll-triggered animations, parallax effects, and interactive portfolio showcase. Award-winning design.",
        tags: &["React", "Framer Motion", "Tailwind CSS", "GSAP"],
        gradient: "from-pink-600 to-purple-600",
    },
    Project {
        icon: "📊",
        title: "Real-time Dashboard",
        description: "Interactive analytics dashboard with animated charts, live data updates, and smooth transitions between views.",
        tags: &["React", "D3.js", "WebSocket", "TypeScript"],
        gradient: "from-cyan-600 to-blue-600",
    },
    Project {
        icon: "🚀",
        title: "SaaS Application",
        description: "Enterprise-grade SaaS platform with complex animations, user onboarding flow, and interactive feature tours.",
        tags: &["Next.js", "Framer Motion", "Stripe API", "Vercel"],
        gradient: "from-orange-600 to-pink-600",
    },
    Project {
        icon: "📱",
        title: "Mobile App Landing Page",
        description: "Modern landing page with 3D transforms, smooth scrolling animations, and responsive design for mobile conversion.",
        tags: &["React", "Three.js", "Framer Motion", "CSS3"],
        gradient: "from-green-600 to-cyan-600",
    },
    Project {
        icon: "🖼️",
        title: "Multimedia Portfolio",
        description: "Interactive portfolio with image galleries, video players, and immersive animations. Perfect UX showcase.",
        tags: &["React", "Framer Motion", "Lightbox", "Responsive"],
        gradient: "from-yellow-600 to-orange-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

static FRONTEND_SKILLS: [Skill; 6] = [
    skill("React", 95),
    skill("TypeScript", 90),
    skill("JavaScript", 95),
    skill("HTML/CSS", 98),
    skill("Responsive Design", 94),
    skill("Next.js", 88),
];

static TOOLS_SKILLS: [Skill; 6] = [
    skill("Git/Github", 92),
    skill("Webpack", 85),
    skill("npm/yarn", 90),
    skill("VS Code", 95),
    skill("Chrome DevTools", 93),
    skill("REST API", 91),
];

static DESIGN_SKILLS: [Skill; 6] = [
    skill("Framer Motion", 96),
    skill("Tailwind CSS", 94),
    skill("GSAP", 87),
    skill("Three.js", 82),
    skill("UI/UX Design", 89),
    skill("Figma", 85),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Tools,
    Design,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown skill category: {0}")]
pub struct UnknownCategory(pub String);

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [Self::Frontend, Self::Tools, Self::Design];

    pub fn id(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Tools => "tools",
            Self::Design => "design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Tools => "Tools & Libraries",
            Self::Design => "Design & Animation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Frontend => "🎨",
            Self::Tools => "⚙️",
            Self::Design => "✨",
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            Self::Frontend => &FRONTEND_SKILLS,
            Self::Tools => &TOOLS_SKILLS,
            Self::Design => &DESIGN_SKILLS,
        }
    }

    /// Category picked by an optional `?skills=` query value. A missing
    /// value means the default tab.
    pub fn from_query(value: Option<&str>) -> Result<Self, UnknownCategory> {
        value.map_or(Ok(Self::default()), str::parse)
    }

    /// Mean proficiency across the category, shown in the summary ring.
    pub fn average_level(self) -> f64 {
        let skills = self.skills();
        if skills.is_empty() {
            return 0.0;
        }
        let total = skills.iter().map(|s| s.level as f64).sum::<f64>();
        total / skills.len() as f64
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SkillCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competency {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: [&'static str; 4],
}

pub const COMPETENCIES: [Competency; 4] = [
    Competency {
        icon: "⚡",
        title: "Performance Optimization",
        items: [
            "Code Splitting",
            "Lazy Loading",
            "Image Optimization",
            "Bundle Analysis",
        ],
    },
    Competency {
        icon: "🔄",
        title: "State Management",
        items: ["Context API", "Redux", "Zustand", "React Query"],
    },
    Competency {
        icon: "✅",
        title: "Testing",
        items: [
            "Jest",
            "React Testing Library",
            "E2E Testing",
            "Visual Regression",
        ],
    },
    Competency {
        icon: "♿",
        title: "Accessibility",
        items: [
            "WCAG Compliance",
            "ARIA Labels",
            "Keyboard Navigation",
            "Screen Reader Support",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SKILL_STATS: [Stat; 4] = [
    Stat {
        value: "50+",
        label: "Technologies",
    },
    Stat {
        value: "100+",
        label: "Projects Built",
    },
    Stat {
        value: "10+",
        label: "Years Combined",
    },
    Stat {
        value: "99%",
        label: "Success Rate",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: "👨‍💻",
        label: "GitHub",
        href: "https://github.com/sandeeptechit07-sketch/",
        color: "from-gray-400 to-gray-600",
    },
    SocialLink {
        icon: "💼",
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/sandeep07k",
        color: "from-blue-400 to-blue-600",
    },
    SocialLink {
        icon: "🐦",
        label: "Twitter",
        href: "https://twitter.com/sandeepkota",
        color: "from-cyan-400 to-cyan-600",
    },
    SocialLink {
        icon: "✉️",
        label: "Email",
        href: "mailto:sandeep.techit07@gmail.com",
        color: "from-red-400 to-red-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: "📧",
        title: "Email",
        value: OWNER_EMAIL,
        color: "from-pink-500 to-pink-600",
    },
    ContactMethod {
        icon: "📱",
        title: "Phone",
        value: "+91 9700495999",
        color: "from-purple-500 to-purple-600",
    },
    ContactMethod {
        icon: "📍",
        title: "Location",
        value: "Bangalore, India",
        color: "from-blue-500 to-blue-600",
    },
];

/// Year the site was built, for the copyright line.
pub fn build_year() -> i32 {
    parse_year(env!("BUILD_TIME")).unwrap_or(2025)
}

fn parse_year(rfc3339: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(rfc3339).ok().map(|t| t.year())
}

pub const HIRE_REASONS: [&str; 4] = [
    "Expert in modern web technologies",
    "Proven track record of successful projects",
    "Excellent communication skills",
    "Quick turnaround times",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_id() {
        for category in SkillCategory::ALL {
            assert_eq!(category.id().parse::<SkillCategory>(), Ok(category));
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "backend".parse::<SkillCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("backend".to_string()));
        assert_eq!(err.to_string(), "unknown skill category: backend");
    }

    #[test]
    fn test_category_from_query() {
        assert_eq!(SkillCategory::from_query(None), Ok(SkillCategory::Frontend));
        assert_eq!(
            SkillCategory::from_query(Some("design")),
            Ok(SkillCategory::Design)
        );
        let err = SkillCategory::from_query(Some("cooking")).unwrap_err();
        assert_eq!(err.to_string(), "unknown skill category: cooking");
    }

    #[test]
    fn test_default_category_is_frontend() {
        assert_eq!(SkillCategory::default(), SkillCategory::Frontend);
    }

    #[test]
    fn test_category_skills_are_distinct() {
        let names = |c: SkillCategory| c.skills().iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(
            names(SkillCategory::Tools),
            vec![
                "Git/Github",
                "Webpack",
                "npm/yarn",
                "VS Code",
                "Chrome DevTools",
                "REST API"
            ]
        );
        assert_ne!(
            names(SkillCategory::Frontend),
            names(SkillCategory::Design)
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SkillCategory::ALL {
            assert!(!category.skills().is_empty());
            assert!(category.skills().iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_average_level() {
        // 92 + 85 + 90 + 95 + 93 + 91 = 546
        assert_eq!(SkillCategory::Tools.average_level(), 91.0);
        let design = SkillCategory::Design.average_level();
        assert!((design - 533.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_year() {
        assert_eq!(parse_year("2026-10-18T09:30:00+00:00"), Some(2026));
        assert_eq!(parse_year("yesterday"), None);
        assert!(build_year() >= 2025);
    }

    #[test]
    fn test_social_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(
                link.href.starts_with("https://") || link.href.starts_with("mailto:"),
                "{} is not absolute",
                link.href
            );
        }
    }
}
