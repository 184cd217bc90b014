//! Static form definitions for every modal kind.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;
use crate::icon::Icon;

/// The fixed set of dialogs the site can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Demo,
    Contact,
    LearnMore,
    GetStarted,
    Newsletter,
    ExploreAi,
    CourseCreation,
    PlatformIntegration,
}

impl ModalKind {
    pub const ALL: [ModalKind; 8] = [
        ModalKind::Demo,
        ModalKind::Contact,
        ModalKind::LearnMore,
        ModalKind::GetStarted,
        ModalKind::Newsletter,
        ModalKind::ExploreAi,
        ModalKind::CourseCreation,
        ModalKind::PlatformIntegration,
    ];

    /// Stable identifier used in logs and on the submission wire.
    pub fn slug(&self) -> &'static str {
        match self {
            ModalKind::Demo => "demo",
            ModalKind::Contact => "contact",
            ModalKind::LearnMore => "learn-more",
            ModalKind::GetStarted => "get-started",
            ModalKind::Newsletter => "newsletter",
            ModalKind::ExploreAi => "explore-ai",
            ModalKind::CourseCreation => "course-creation",
            ModalKind::PlatformIntegration => "platform-integration",
        }
    }

    pub fn config(&self) -> &'static ModalConfig {
        match self {
            ModalKind::Demo => &DEMO,
            ModalKind::Contact => &CONTACT,
            ModalKind::LearnMore => &LEARN_MORE,
            ModalKind::GetStarted => &GET_STARTED,
            ModalKind::Newsletter => &NEWSLETTER,
            ModalKind::ExploreAi => &EXPLORE_AI,
            ModalKind::CourseCreation => &COURSE_CREATION,
            ModalKind::PlatformIntegration => &PLATFORM_INTEGRATION,
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ModalKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| SiteError::UnknownModalKind(s.to_string()))
    }
}

/// Input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Value of the HTML `type` attribute. `None` for a textarea, which has none.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

impl FormField {
    const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        placeholder: &'static str,
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder,
            required,
        }
    }
}

/// Everything the shared dialog needs to render one modal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub fields: &'static [FormField],
    pub submit_text: &'static str,
    pub success_message: &'static str,
}

impl ModalConfig {
    pub fn required_fields(&self) -> impl Iterator<Item = &'static FormField> {
        self.fields.iter().filter(|field| field.required)
    }
}

use FieldKind::{Email, Text, TextArea};

const NAME: FormField = FormField::new("name", "Full Name", Text, "John Doe", true);
const EMAIL: FormField =
    FormField::new("email", "Email Address", Email, "john@example.com", true);
const WORK_EMAIL: FormField =
    FormField::new("email", "Work Email", Email, "john@university.edu", true);

static DEMO: ModalConfig = ModalConfig {
    title: "Request a Demo",
    description: "See how B Wells can transform your educational content into intelligent, conversational courses.",
    icon: Icon::Sparkles,
    fields: &[
        NAME,
        WORK_EMAIL,
        FormField::new("institution", "Institution", Text, "University of...", false),
        FormField::new("role", "Your Role", Text, "Professor, Administrator, etc.", false),
        FormField::new(
            "message",
            "What are you hoping to achieve?",
            TextArea,
            "Tell us about your goals...",
            false,
        ),
    ],
    submit_text: "Schedule Demo",
    success_message: "Thank you! We'll be in touch within 24 hours to schedule your personalized demo.",
};

static CONTACT: ModalConfig = ModalConfig {
    title: "Contact Us",
    description: "Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
    icon: Icon::Mail,
    fields: &[
        NAME,
        EMAIL,
        FormField::new("subject", "Subject", Text, "How can we help?", false),
        FormField::new("message", "Message", TextArea, "Your message...", true),
    ],
    submit_text: "Send Message",
    success_message: "Message sent! We'll get back to you within 1-2 business days.",
};

static LEARN_MORE: ModalConfig = ModalConfig {
    title: "Learn More About B Wells",
    description: "Get detailed information about our AI-powered educational platform sent directly to your inbox.",
    icon: Icon::BookOpen,
    fields: &[
        NAME,
        EMAIL,
        FormField::new(
            "interest",
            "What interests you most?",
            Text,
            "AI co-instruction, course creation, etc.",
            false,
        ),
    ],
    submit_text: "Get Information",
    success_message: "Check your inbox! We've sent you detailed information about B Wells.",
};

static GET_STARTED: ModalConfig = ModalConfig {
    title: "Get Started with B Wells",
    description: "Create your account and start transforming your educational content today.",
    icon: Icon::Users,
    fields: &[
        NAME,
        WORK_EMAIL,
        FormField::new("institution", "Institution", Text, "University of...", true),
        FormField::new(
            "courses",
            "How many courses do you manage?",
            Text,
            "1-5, 6-20, 20+...",
            false,
        ),
    ],
    submit_text: "Create Account",
    success_message: "Welcome to B Wells! Check your email for next steps to set up your account.",
};

static NEWSLETTER: ModalConfig = ModalConfig {
    title: "Stay Updated",
    description: "Get the latest news, tips, and insights on AI in education delivered to your inbox.",
    icon: Icon::Mail,
    fields: &[
        EMAIL,
        FormField::new(
            "interests",
            "Topics of Interest",
            Text,
            "AI, EdTech, Course Design...",
            false,
        ),
    ],
    submit_text: "Subscribe",
    success_message: "You're subscribed! Watch your inbox for our next newsletter.",
};

static EXPLORE_AI: ModalConfig = ModalConfig {
    title: "Explore AI Co-Instruction",
    description: "Learn how our AI assistant can help you create summaries, quizzes, exams, and lecture notes automatically.",
    icon: Icon::Sparkles,
    fields: &[
        NAME,
        EMAIL,
        FormField::new(
            "subject",
            "What subject do you teach?",
            Text,
            "Biology, History, etc.",
            false,
        ),
        FormField::new(
            "challenge",
            "What's your biggest content creation challenge?",
            TextArea,
            "Tell us more...",
            false,
        ),
    ],
    submit_text: "Explore AI Features",
    success_message: "We've sent you detailed information about our AI co-instruction capabilities!",
};

static COURSE_CREATION: ModalConfig = ModalConfig {
    title: "Effortless Course Creation",
    description: "See how B Wells can help you build LMS modules, generate assessments, and create lecture materials in hours, not weeks.",
    icon: Icon::BookOpen,
    fields: &[
        NAME,
        EMAIL,
        FormField::new(
            "lms",
            "What LMS do you use?",
            Text,
            "Canvas, Blackboard, Moodle...",
            false,
        ),
        FormField::new(
            "courses",
            "How many courses do you need to create/update?",
            Text,
            "1-5, 6-10, 10+...",
            false,
        ),
    ],
    submit_text: "Learn About Course Creation",
    success_message: "Check your email for a detailed guide on effortless course creation with B Wells!",
};

static PLATFORM_INTEGRATION: ModalConfig = ModalConfig {
    title: "Platform Integration",
    description: "Discover how B Wells unifies textbooks, PDFs, videos, and existing LMS content into one cohesive experience.",
    icon: Icon::MessageSquare,
    fields: &[
        NAME,
        EMAIL,
        FormField::new(
            "platforms",
            "What platforms do you currently use?",
            Text,
            "Canvas, Zoom, Google Drive...",
            false,
        ),
        FormField::new(
            "pain",
            "What's your biggest integration challenge?",
            TextArea,
            "Describe your current workflow...",
            false,
        ),
    ],
    submit_text: "Discover Integration Options",
    success_message: "We've sent you information about our seamless integration capabilities!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for kind in ModalKind::ALL {
            assert_eq!(kind.slug().parse::<ModalKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!(matches!(
            "pricing".parse::<ModalKind>(),
            Err(SiteError::UnknownModalKind(s)) if s == "pricing"
        ));
    }

    #[test]
    fn demo_fields_match_published_form() {
        let config = ModalKind::Demo.config();
        let labels: Vec<_> = config.fields.iter().map(|f| (f.label, f.required)).collect();
        assert_eq!(
            labels,
            vec![
                ("Full Name", true),
                ("Work Email", true),
                ("Institution", false),
                ("Your Role", false),
                ("What are you hoping to achieve?", false),
            ]
        );
        assert_eq!(config.fields[4].kind, FieldKind::TextArea);
    }

    #[test]
    fn every_kind_has_a_complete_config() {
        for kind in ModalKind::ALL {
            let config = kind.config();
            assert!(!config.title.is_empty(), "{kind} title");
            assert!(!config.submit_text.is_empty(), "{kind} submit text");
            assert!(!config.success_message.is_empty(), "{kind} success message");
            assert!(config.required_fields().any(|f| f.name == "email"), "{kind} email");
        }
    }

    #[test]
    fn field_names_are_unique_per_form() {
        for kind in ModalKind::ALL {
            let mut names: Vec<_> = kind.config().fields.iter().map(|f| f.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{kind} has duplicate field names");
        }
    }

    #[test]
    fn input_type_per_field_kind() {
        assert_eq!(FieldKind::Email.input_type(), Some("email"));
        assert_eq!(FieldKind::Text.input_type(), Some("text"));
        assert_eq!(FieldKind::TextArea.input_type(), None);
    }
}
