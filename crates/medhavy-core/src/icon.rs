//! Icon identifiers used across the site.
//!
//! Icon artwork is not shipped; each icon renders as a unicode glyph with an
//! accessible name.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sparkles,
    Mail,
    BookOpen,
    Users,
    MessageSquare,
    Zap,
    GraduationCap,
    Building,
    Clock,
    TrendingDown,
    Shield,
    ShieldCheck,
    Hand,
    Globe,
    User,
    Lightbulb,
    ArrowRight,
    ChevronLeft,
    ChevronRight,
    Check,
    Menu,
    Close,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sparkles => "\u{2728}",
            Icon::Mail => "\u{2709}",
            Icon::BookOpen => "\u{1F4D6}",
            Icon::Users => "\u{1F465}",
            Icon::MessageSquare => "\u{1F4AC}",
            Icon::Zap => "\u{26A1}",
            Icon::GraduationCap => "\u{1F393}",
            Icon::Building => "\u{1F3DB}",
            Icon::Clock => "\u{1F552}",
            Icon::TrendingDown => "\u{2198}",
            Icon::Shield => "\u{1F6E1}",
            Icon::ShieldCheck => "\u{2714}",
            Icon::Hand => "\u{270B}",
            Icon::Globe => "\u{1F310}",
            Icon::User => "\u{1F464}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::ArrowRight => "\u{2192}",
            Icon::ChevronLeft => "\u{2039}",
            Icon::ChevronRight => "\u{203A}",
            Icon::Check => "\u{2713}",
            Icon::Menu => "\u{2630}",
            Icon::Close => "\u{00D7}",
        }
    }

    /// Accessible name for screen readers.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Sparkles => "sparkles",
            Icon::Mail => "mail",
            Icon::BookOpen => "book",
            Icon::Users => "people",
            Icon::MessageSquare => "message",
            Icon::Zap => "lightning",
            Icon::GraduationCap => "graduation cap",
            Icon::Building => "institution",
            Icon::Clock => "clock",
            Icon::TrendingDown => "trending down",
            Icon::Shield => "shield",
            Icon::ShieldCheck => "verified",
            Icon::Hand => "hand",
            Icon::Globe => "globe",
            Icon::User => "person",
            Icon::Lightbulb => "idea",
            Icon::ArrowRight => "arrow",
            Icon::ChevronLeft => "previous",
            Icon::ChevronRight => "next",
            Icon::Check => "success",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }
}
