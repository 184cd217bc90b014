//! Marketing copy and section data.

use std::time::Duration;

use crate::chart::DonutSegment;
use crate::icon::Icon;
use crate::modal::ModalKind;
use crate::typewriter::TypewriterTiming;

pub const BRAND: &str = "B WELLS";
pub const FOOTER_BRAND: &str = "MEDHAVY";

// === Hero ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HERO_SLIDES: [Slide; 3] = [
    Slide {
        icon: Icon::BookOpen,
        title: "Conversational Learning",
        description: "Students engage with course material through natural dialogue",
    },
    Slide {
        icon: Icon::Sparkles,
        title: "AI-Powered Insights",
        description: "Get intelligent suggestions and automated content creation",
    },
    Slide {
        icon: Icon::Zap,
        title: "Seamless Integration",
        description: "Works with any LTI-compliant learning management system",
    },
];

pub const HERO_WORDS: [&str; 4] = ["Intelligent", "Interactive", "Personalized", "Engaging"];
pub const HERO_TIMING: TypewriterTiming = TypewriterTiming::from_millis(120, 80, 2500);

// === Features ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Anchor id used by the header links
    pub anchor: Option<&'static str>,
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub modal: ModalKind,
    pub image: ImagePosition,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        anchor: Some("features"),
        eyebrow: Some("What B Wells Does"),
        title: "Conversational Textbooks",
        description: "Students ask questions in natural language and receive answers grounded in your course content, not generic internet responses. Created using conceptual scaffolding principles rooted in learning science. Static PDFs become interactive conversations tailored to your curriculum.",
        cta: "Learn More",
        modal: ModalKind::LearnMore,
        image: ImagePosition::Left,
        icon: Icon::BookOpen,
    },
    Feature {
        anchor: Some("how-it-works"),
        eyebrow: None,
        title: "AI as Co-Instructor",
        description: "B Wells automatically creates summaries, quizzes, exams, and lecture notes while keeping you in control. AI proposes. You dispose. Your pedagogical expertise and teaching philosophy stay front and center.",
        cta: "Explore AI co-instruction",
        modal: ModalKind::ExploreAi,
        image: ImagePosition::Right,
        icon: Icon::Sparkles,
    },
    Feature {
        anchor: None,
        eyebrow: None,
        title: "Effortless Course Creation",
        description: "B Wells imports any course content materials and builds LMS modules, generates assessments, and creates lecture materials. Course prep that used to take weeks now takes an afternoon of review.",
        cta: "See how B Wells saves time",
        modal: ModalKind::CourseCreation,
        image: ImagePosition::Left,
        icon: Icon::Zap,
    },
    Feature {
        anchor: None,
        eyebrow: None,
        title: "Unified Learning Platform",
        description: "One cohesive course experience. B Wells unifies textbooks, PDFs, images and videos, and existing LMS content, eliminating frustrating platform jumping for students and instructors.",
        cta: "Discover platform integration",
        modal: ModalKind::PlatformIntegration,
        image: ImagePosition::Right,
        icon: Icon::MessageSquare,
    },
];

// === Stats ===

/// Hours of prep for a 3-credit course, traditional vs. assisted.
pub const TRADITIONAL_HOURS: i64 = 120;
pub const ASSISTED_HOURS: i64 = 6;
pub const TIME_REDUCTION_PERCENT: i64 = 95;

/// Headline number on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFigure {
    /// Counts up to [`TIME_REDUCTION_PERCENT`] with the bar chart
    ReductionPercent,
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub figure: StatFigure,
    pub icon: Icon,
    pub heading: &'static str,
    pub body: &'static str,
    /// Stagger for the reveal transition
    pub delay_ms: u32,
}

pub const STAT_CARDS: [StatCard; 3] = [
    StatCard {
        figure: StatFigure::ReductionPercent,
        icon: Icon::TrendingDown,
        heading: "Time Reduction",
        body: "Faculty move from content creation to content curation.",
        delay_ms: 300,
    },
    StatCard {
        figure: StatFigure::Fixed("100%"),
        icon: Icon::Shield,
        heading: "Instructor Control",
        body: "AI generates drafts, but nothing goes live without your approval.",
        delay_ms: 500,
    },
    StatCard {
        figure: StatFigure::Fixed("3x"),
        icon: Icon::Zap,
        heading: "Faster Updates",
        body: "Iterate on course materials three times faster than traditional methods.",
        delay_ms: 700,
    },
];

// === Ecosystem ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PARTNERS: [Partner; 3] = [
    Partner {
        icon: Icon::GraduationCap,
        title: "Students",
        description: "Access conversational textbooks that provide personalized explanations, cohesive course materials, and more time to focus on understanding concepts.",
    },
    Partner {
        icon: Icon::Users,
        title: "Instructors",
        description: "Get an AI co-instructor that knows their course, aligns with their teaching style, and cuts course build time from weeks to hours.",
    },
    Partner {
        icon: Icon::Building,
        title: "Administrators",
        description: "Deploy consistent, high-quality courses at scale with LTI-compliant integration, FERPA-compliant architecture, version control, and best-practice AI implementation.",
    },
];

pub const ECOSYSTEM_HEADING: &str = "The Medhavy Ecosystem";
/// Gap between the section becoming visible and the heading starting to type.
pub const ECOSYSTEM_HEADING_DELAY: Duration = Duration::from_millis(500);
pub const ECOSYSTEM_HEADING_CHAR_DELAY: Duration = Duration::from_millis(50);

// === Footer ===

pub const FOOTER_WORDS: [&str; 3] = [
    "Ready to Transform Your Courses?",
    "Ready to Revolutionize Learning?",
    "Ready to Empower Students?",
];
pub const FOOTER_TIMING: TypewriterTiming = TypewriterTiming::from_millis(80, 40, 3000);

pub const PRODUCT_LINKS: [&str; 5] = [
    "Features",
    "How It Works",
    "Pricing",
    "Case Studies",
    "Documentation",
];
pub const COMPANY_LINKS: [&str; 5] = ["About Us", "Our Team", "Careers", "Blog", "Contact"];
pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

// === About ===

pub const ABOUT_HEADING: &str = "Intellectually Brilliant";
pub const ABOUT_HEADING_CHAR_DELAY: Duration = Duration::from_millis(80);

pub const DONUT_SEGMENTS: [DonutSegment; 3] = [
    DonutSegment {
        percent: 35.0,
        color: "#2563eb",
        label: "Active Content",
    },
    DonutSegment {
        percent: 25.0,
        color: "#93c5fd",
        label: "In Transformation",
    },
    DonutSegment {
        percent: 40.0,
        color: "#1e3a5f",
        label: "Static Backlog",
    },
];
/// Donut draw-in starts this long after the mission section is visible.
pub const DONUT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leader {
    pub icon: Icon,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub highlighted: bool,
}

pub const LEADERS: [Leader; 2] = [
    Leader {
        icon: Icon::User,
        name: "Professor Sridhar Srinivas",
        role: "Founder & Visionary",
        bio: "A career educator dedicated to closing the accessibility gap in Higher Ed. Sridhar leads the pedagogical framework of Medhavy.",
        highlighted: false,
    },
    Leader {
        icon: Icon::ShieldCheck,
        name: "Humanitarians AI",
        role: "Philanthropic Support",
        bio: "A global collective of AI fellows ensuring Medhavy remains ethical, FERPA-compliant, and focused on social impact.",
        highlighted: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const CORE_VALUES: [CoreValue; 3] = [
    CoreValue {
        icon: Icon::Shield,
        title: "Integrity",
        body: "We adhere to the highest standards of data privacy and LTI 1.3 certification to protect our institutions.",
    },
    CoreValue {
        icon: Icon::Hand,
        title: "Control",
        body: "\u{201C}AI proposes, you dispose.\u{201D} Faculty stay at the heart of the learning experience, always.",
    },
    CoreValue {
        icon: Icon::Globe,
        title: "Democratization",
        body: "Knowledge shouldn't be limited by geography. We serve the global learner community.",
    },
];

pub const LEARNING_PRINCIPLES: [(&str, &str); 2] = [
    (
        "Zone of Proximal Development",
        "Identifies the sweet spot between what students know and what they can learn with guidance.",
    ),
    (
        "Scaffolded Learning",
        "Provides structured support that gradually decreases as competence increases.",
    ),
];
