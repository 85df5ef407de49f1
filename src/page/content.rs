//! Display content for every section of the page.
//!
//! All records are fixed at build time. Card-like records carry the 1-based
//! position the page uses to stagger their reveals.

/// Icon identifiers; the rendering layer maps them to artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    BrainCircuit,
    CheckCircle,
    Globe,
    Shield,
    BookOpen,
    Code,
    Terminal,
    Laptop,
    MessageSquare,
    Zap,
    ArrowRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub position: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Zara,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DemoHighlight {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SpecCard {
    pub icon: Icon,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub gradient: (&'static str, &'static str),
    pub position: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const BRAND: &str = "Zara AI";

pub const HERO_BADGE: &str = "Introducing Zara AI";
pub const HERO_TITLE: [&str; 2] = ["The Next Generation", "AI Assistant"];
pub const HERO_SUBTITLE: &str = "Zara AI combines advanced conversational intelligence with real-time capabilities for web design, cybersecurity, and education support\u{2014}all in a beautifully designed experience.";
pub const HERO_ACTIONS: [&str; 2] = ["Try Zara AI", "Learn More"];

pub const FEATURES_HEADING: &str = "Powerful Features That Set Zara Apart";
pub const FEATURES_INTRO: &str = "Designed with attention to every detail, Zara combines cutting-edge AI capabilities with a beautiful, user-friendly experience.";

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        icon: Icon::BrainCircuit,
        title: "Advanced AI Personality",
        description: "Balancing professionalism with friendliness while delivering context-aware insights and adapting to user interactions.",
        position: 1,
    },
    FeatureCard {
        icon: Icon::CheckCircle,
        title: "Intelligent Conversation",
        description: "Remembers your name, maintains context across conversations, and provides positive encouragement with multi-language support.",
        position: 2,
    },
    FeatureCard {
        icon: Icon::Globe,
        title: "Real-Time Capabilities",
        description: "Fetches live data including weather updates, news, cybersecurity alerts, and cryptocurrency prices when you need it.",
        position: 3,
    },
    FeatureCard {
        icon: Icon::Shield,
        title: "Security & Protection",
        description: "Detects online threats in real-time and educates users on digital security best practices to keep you safe online.",
        position: 4,
    },
    FeatureCard {
        icon: Icon::BookOpen,
        title: "Education Support",
        description: "Step-by-step explanations for coding, physics, and exam preparations with a smart tutor mode to break down complex topics.",
        position: 5,
    },
    FeatureCard {
        icon: Icon::Code,
        title: "Web Design Helper",
        description: "Get code suggestions for modern, responsive websites and learn design optimization using advanced AI techniques.",
        position: 6,
    },
];

pub const DEMO_HEADING: &str = "See Zara AI in Action";
pub const DEMO_INTRO: &str = "Experience how Zara helps with everything from coding assistance to cybersecurity alerts";
pub const CHAT_TITLE: &str = "Zara AI Chat";
pub const CHAT_PLACEHOLDER: &str = "Ask Zara AI something...";

pub const CHAT: [ChatMessage; 4] = [
    ChatMessage {
        id: 1,
        sender: Sender::User,
        text: "Can you help me with a React component?",
    },
    ChatMessage {
        id: 2,
        sender: Sender::Zara,
        text: "Of course! I can help you create a React component. What functionality are you looking for?",
    },
    ChatMessage {
        id: 3,
        sender: Sender::User,
        text: "I need a responsive navbar with a mobile menu",
    },
    ChatMessage {
        id: 4,
        sender: Sender::Zara,
        text: "I'll create that for you! Here's a responsive navbar component with mobile menu toggle, animations, and proper accessibility...",
    },
];

pub const DEMO_HIGHLIGHTS: [DemoHighlight; 3] = [
    DemoHighlight {
        icon: Icon::Laptop,
        title: "AI Code Generation",
        body: "Zara creates optimized code for web applications, with real-time feedback and explanation.",
    },
    DemoHighlight {
        icon: Icon::MessageSquare,
        title: "Natural Conversations",
        body: "Have natural, context-aware conversations that remember your preferences and history.",
    },
    DemoHighlight {
        icon: Icon::Zap,
        title: "Real-Time Capabilities",
        body: "Get live data, weather updates, cybersecurity alerts, and more through Zara's connected services.",
    },
];

pub const SPECS_HEADING: &str = "Technical Specifications";
pub const SPECS_INTRO: &str = "Zara AI comes in multiple formats, each optimized for different use cases and environments.";

pub const SPECS: [SpecCard; 3] = [
    SpecCard {
        icon: Icon::Terminal,
        title: "CLI-Based Zara",
        bullets: &[
            "Llama 2 local model",
            "SQLite conversation history",
            "Offline processing capability",
            "Basic threat detection",
            "Low-latency responses",
        ],
        gradient: ("zara-blue", "zara-cyan"),
        position: 1,
    },
    SpecCard {
        icon: Icon::Globe,
        title: "Web-Based Zara",
        bullets: &[
            "Gemini AI 2.0 integration",
            "Glossy Nebula UI",
            "Live data integration",
            "Voice & animation support",
            "Real-time cybersecurity alerts",
        ],
        gradient: ("zara-indigo", "zara-purple"),
        position: 2,
    },
    SpecCard {
        icon: Icon::Code,
        title: "Zara API (Coming Soon)",
        bullets: &[
            "Developer integration",
            "Custom application support",
            "Hosted Llama 2 model access",
            "Advanced cybersecurity features",
            "Flexible configuration options",
        ],
        gradient: ("zara-purple", "zara-pink"),
        position: 3,
    },
];

pub const CTA_HEADING: &str = "Ready to Experience the Future of AI?";
pub const CTA_BODY: &str = "Join the Zara AI community today and transform how you work, learn, and interact with artificial intelligence.";
pub const CTA_ACTIONS: [&str; 2] = ["Get Started Now", "View Documentation"];

pub const FOOTER_TAGLINE: &str = "Next-generation AI assistant for web designers, cybersecurity experts, students, and professionals.";

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Features",
        links: &[
            "AI Personality",
            "Intelligent Conversation",
            "Voice Interaction",
            "Web Design Helper",
            "Code Playground",
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            "Documentation",
            "API Reference",
            "Tutorials",
            "Community",
            "Support",
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &["About", "Team", "Careers", "Press", "Contact"],
    },
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];
pub const COPYRIGHT: &str = "\u{a9} 2025 Zencripts. All rights reserved.";

#[cfg(test)]
#[path = "../../tests/unit/page/content.rs"]
mod tests;
