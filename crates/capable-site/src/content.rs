//! Static marketing copy rendered by the page sections.
//!
//! All records are `'static` and defined once; nothing here is mutated.

use serde::Serialize;

use crate::navigation::Section;
use crate::portfolio::ProjectTag;

/// Icon reference. The frontend renders the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Icon {
    Code,
    Smartphone,
    TrendingUp,
    Users,
    Star,
    Zap,
    Award,
    Palette,
    Shield,
    BarChart,
    Globe,
    Target,
    Eye,
    Heart,
    Lightbulb,
    Rocket,
    Quote,
    CheckCircle,
    Phone,
    Mail,
    MapPin,
    Send,
    Calendar,
    ArrowRight,
    ArrowUp,
    ExternalLink,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Menu,
    Close,
    Sun,
    Moon,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Smartphone => "📱",
            Self::TrendingUp => "📈",
            Self::Users => "👥",
            Self::Star => "★",
            Self::Zap => "⚡",
            Self::Award => "🏆",
            Self::Palette => "🎨",
            Self::Shield => "🛡",
            Self::BarChart => "📊",
            Self::Globe => "🌐",
            Self::Target => "🎯",
            Self::Eye => "👁",
            Self::Heart => "♥",
            Self::Lightbulb => "💡",
            Self::Rocket => "🚀",
            Self::Quote => "❝",
            Self::CheckCircle => "✔",
            Self::Phone => "☎",
            Self::Mail => "✉",
            Self::MapPin => "📍",
            Self::Send => "➤",
            Self::Calendar => "📅",
            Self::ArrowRight => "→",
            Self::ArrowUp => "↑",
            Self::ExternalLink => "↗",
            Self::Github => "GH",
            Self::Linkedin => "in",
            Self::Twitter => "𝕏",
            Self::Instagram => "IG",
            Self::Facebook => "f",
            Self::Youtube => "▶",
            Self::Menu => "☰",
            Self::Close => "✕",
            Self::Sun => "☀",
            Self::Moon => "☾",
        }
    }
}

/// Accent gradient token for cards and icon tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ColorToken {
    BluePurple,
    GreenTeal,
    OrangeRed,
    PurplePink,
    Blue,
    Red,
    Yellow,
    Green,
}

impl ColorToken {
    /// Start and end stops of the gradient.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Self::BluePurple => ("#3b82f6", "#9333ea"),
            Self::GreenTeal => ("#22c55e", "#0d9488"),
            Self::OrangeRed => ("#f97316", "#dc2626"),
            Self::PurplePink => ("#a855f7", "#db2777"),
            Self::Blue => ("#3b82f6", "#2563eb"),
            Self::Red => ("#ef4444", "#dc2626"),
            Self::Yellow => ("#eab308", "#ca8a04"),
            Self::Green => ("#22c55e", "#16a34a"),
        }
    }

    pub fn css_gradient(self) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient(90deg, {from} 0%, {to} 100%)")
    }
}

/// Where a link leads: an in-page section, another page on the site, or
/// somewhere else entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    Section(Section),
    Page(&'static str),
    External(&'static str),
}

impl LinkTarget {
    pub fn href(self) -> String {
        match self {
            Self::Section(section) => section.href(),
            Self::Page(path) | Self::External(path) => path.to_string(),
        }
    }

    pub fn opens_new_tab(self) -> bool {
        matches!(self, Self::External(href) if href.starts_with("http"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

/// Short service blurb used by the navbar drop-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceTeaser {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

/// Icon, title and one line of copy; used for the smaller feature tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A statistic the about section counts up to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CounterStat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyValue {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub color: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub live: Option<&'static str>,
    pub source: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Category tags; the first one is shown as the card badge.
    pub tags: &'static [ProjectTag],
    pub technologies: &'static [&'static str],
    pub links: ProjectLinks,
    pub metrics: &'static [Metric],
    pub featured: bool,
    pub year: u16,
    pub client: &'static str,
}

impl Project {
    pub fn has_tag(&self, tag: ProjectTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn primary_tag(&self) -> Option<ProjectTag> {
        self.tags.first().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub details: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    /// Hover tint in the footer.
    pub brand_color: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterContact {
    pub icon: Icon,
    pub text: &'static str,
    pub target: LinkTarget,
}

/// Badge, two-line heading and lead paragraph opening a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionIntro {
    pub badge: &'static str,
    pub title: &'static str,
    /// Second heading line, in the primary color.
    pub highlight: &'static str,
    pub lead: &'static str,
}

/// Closing call-to-action panel. Buttons scroll to their section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub primary: (&'static str, Section),
    pub secondary: Option<(&'static str, Section)>,
}

/// Heading and one-line subtitle of a sub-block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Subheading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

// ------ Navigation ------

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", section: Section::Home },
    NavLink { label: "Services", section: Section::Services },
    NavLink { label: "About", section: Section::About },
    NavLink { label: "Portfolio", section: Section::Portfolio },
    NavLink { label: "Contact", section: Section::Contact },
];

pub static NAV_SERVICES: [ServiceTeaser; 4] = [
    ServiceTeaser {
        title: "Web Development",
        description: "Custom websites and web applications",
    },
    ServiceTeaser {
        title: "App Development",
        description: "Mobile and desktop applications",
    },
    ServiceTeaser {
        title: "Digital Marketing",
        description: "SEO, social media, and online advertising",
    },
    ServiceTeaser {
        title: "Domestic Staffing",
        description: "Professional staffing solutions",
    },
];

// ------ Hero ------

pub static HERO_TITLE: [&str; 2] = ["Capable", "Groups"];

pub static HERO_SUBTITLE: (&str, &str, &str) = (
    "Transforming businesses with cutting-edge ",
    "digital solutions",
    ", innovative development, and strategic marketing that drives real results.",
);

pub static HERO_CTAS: [(&str, Section); 2] = [
    ("Explore Our Services", Section::Services),
    ("View Our Work", Section::Portfolio),
];

pub static HERO_STATS: [HeroStat; 4] = [
    HeroStat { icon: Icon::Users, value: "500+", label: "Happy Clients" },
    HeroStat { icon: Icon::Star, value: "1000+", label: "Projects Completed" },
    HeroStat { icon: Icon::Award, value: "5+", label: "Years Experience" },
    HeroStat { icon: Icon::Zap, value: "24/7", label: "Support" },
];

// ------ Services ------

pub static SERVICES: [Service; 4] = [
    Service {
        id: "web-dev",
        title: "Web Development",
        description: "Custom websites and web applications built with modern technologies for optimal performance and user experience.",
        icon: Icon::Code,
        color: ColorToken::BluePurple,
        features: &["React & Next.js", "Full-Stack Solutions", "E-commerce", "CMS Integration"],
        technologies: &["React", "Next.js", "Node.js", "TypeScript", "MongoDB"],
    },
    Service {
        id: "app-dev",
        title: "App Development",
        description: "Native and cross-platform mobile applications that engage users and drive business growth.",
        icon: Icon::Smartphone,
        color: ColorToken::GreenTeal,
        features: &["iOS & Android", "Cross-Platform", "UI/UX Design", "App Store Optimization"],
        technologies: &["React Native", "Flutter", "Swift", "Kotlin", "Firebase"],
    },
    Service {
        id: "digital-marketing",
        title: "Digital Marketing",
        description: "Comprehensive digital marketing strategies that boost your online presence and drive conversions.",
        icon: Icon::TrendingUp,
        color: ColorToken::OrangeRed,
        features: &["SEO & SEM", "Social Media", "Content Marketing", "PPC Advertising"],
        technologies: &["Google Ads", "Analytics", "SEMrush", "Facebook Ads", "HubSpot"],
    },
    Service {
        id: "staffing",
        title: "Domestic Staffing",
        description: "Professional staffing solutions connecting you with qualified domestic personnel for your household needs.",
        icon: Icon::Users,
        color: ColorToken::PurplePink,
        features: &["Background Checks", "Skill Assessment", "24/7 Support", "Replacement Guarantee"],
        technologies: &["HR Systems", "Screening Tools", "Management Software", "Communication Platforms"],
    },
];

pub static SERVICES_INTRO: SectionIntro = SectionIntro {
    badge: "Our Services",
    title: "Complete Digital",
    highlight: "Solutions",
    lead: "From concept to deployment, we provide end-to-end digital services that transform your business and drive growth in the modern marketplace.",
};

pub static ADDITIONAL_SERVICES_HEADING: Subheading = Subheading {
    title: "Additional Expertise",
    subtitle: "Comprehensive solutions for all your digital needs",
};

pub static SERVICES_CTA: CallToAction = CallToAction {
    title: "Ready to Transform Your Business?",
    body: "Let's discuss your project and create a customized solution that drives results and exceeds expectations.",
    primary: ("Get Free Consultation", Section::Contact),
    secondary: Some(("View Portfolio", Section::Portfolio)),
};

pub static ADDITIONAL_SERVICES: [Highlight; 4] = [
    Highlight { icon: Icon::Palette, title: "UI/UX Design", description: "Beautiful and intuitive designs" },
    Highlight { icon: Icon::Shield, title: "Cybersecurity", description: "Protect your digital assets" },
    Highlight { icon: Icon::BarChart, title: "Analytics", description: "Data-driven insights" },
    Highlight { icon: Icon::Globe, title: "Cloud Solutions", description: "Scalable infrastructure" },
];

// ------ About ------

pub static ABOUT_INTRO: SectionIntro = SectionIntro {
    badge: "About Us",
    title: "Driving Digital",
    highlight: "Excellence",
    lead: "We're a team of passionate professionals dedicated to delivering innovative digital solutions that transform businesses and create lasting impact.",
};

pub static VALUES_HEADING: Subheading = Subheading {
    title: "Our Values",
    subtitle: "The principles that guide everything we do",
};

pub static JOURNEY_HEADING: Subheading = Subheading {
    title: "Our Journey",
    subtitle: "Milestones that define our growth and success",
};

pub static TESTIMONIALS_HEADING: Subheading = Subheading {
    title: "What Our Clients Say",
    subtitle: "Real feedback from businesses we've helped transform",
};

pub static ABOUT_CTA: CallToAction = CallToAction {
    title: "Ready to Start Your Journey?",
    body: "Join hundreds of satisfied clients who've transformed their businesses with our digital solutions.",
    primary: ("Get Started Today", Section::Contact),
    secondary: None,
};

pub static ABOUT_STATS: [CounterStat; 4] = [
    CounterStat { target: 500, suffix: "+", label: "Happy Clients" },
    CounterStat { target: 1000, suffix: "+", label: "Projects Completed" },
    CounterStat { target: 98, suffix: "%", label: "Success Rate" },
    CounterStat { target: 24, suffix: "/7", label: "Support Available" },
];

pub static MISSION: &str = "To empower businesses with cutting-edge digital solutions that drive growth, enhance efficiency, and create exceptional user experiences. We believe in transforming ideas into reality through innovation, expertise, and unwavering commitment to excellence.";

pub static VISION: &str = "To be the leading digital agency that businesses trust for transformative solutions. We envision a future where technology seamlessly integrates with human needs, creating sustainable value and meaningful connections between brands and their audiences.";

pub static VALUES: [CompanyValue; 4] = [
    CompanyValue {
        icon: Icon::Target,
        title: "Excellence",
        description: "We strive for perfection in every project, delivering solutions that exceed expectations.",
        color: ColorToken::Blue,
    },
    CompanyValue {
        icon: Icon::Heart,
        title: "Integrity",
        description: "Honest communication and transparent processes build lasting relationships with our clients.",
        color: ColorToken::Red,
    },
    CompanyValue {
        icon: Icon::Lightbulb,
        title: "Innovation",
        description: "We embrace cutting-edge technologies and creative approaches to solve complex challenges.",
        color: ColorToken::Yellow,
    },
    CompanyValue {
        icon: Icon::Rocket,
        title: "Growth",
        description: "We're committed to continuous learning and helping our clients achieve sustainable growth.",
        color: ColorToken::Green,
    },
];

pub static MILESTONES: [Milestone; 6] = [
    Milestone { year: 2019, title: "Company Founded", description: "Started with a vision to transform digital experiences" },
    Milestone { year: 2020, title: "100 Clients", description: "Reached our first major milestone in client satisfaction" },
    Milestone { year: 2021, title: "Expanded Services", description: "Added digital marketing and staffing solutions" },
    Milestone { year: 2022, title: "Award Recognition", description: "Received multiple industry awards for excellence" },
    Milestone { year: 2023, title: "500+ Projects", description: "Completed over 500 successful projects" },
    Milestone { year: 2024, title: "National Presence", description: "Expanded operations across major US cities" },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc.",
        content: "Capable Groups transformed our online presence completely. Their web development team delivered a stunning, high-performance website that increased our conversions by 300%.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director, GrowthCo",
        content: "Their digital marketing expertise is unmatched. We saw a 250% increase in qualified leads within the first three months of working with them.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Founder, HomeEase",
        content: "The domestic staffing solution they provided was exactly what we needed. Professional, reliable, and perfectly matched to our requirements.",
        rating: 5,
    },
];

// ------ Portfolio ------

pub static PORTFOLIO_INTRO: SectionIntro = SectionIntro {
    badge: "Our Work",
    title: "Portfolio &",
    highlight: "Success Stories",
    lead: "Explore our recent projects and see how we've helped businesses transform their digital presence and achieve remarkable results.",
};

pub static PORTFOLIO_CTA: CallToAction = CallToAction {
    title: "Ready to Create Your Success Story?",
    body: "Let's collaborate on your next project and create something amazing together. We're excited to bring your vision to life.",
    primary: ("Start Your Project", Section::Contact),
    secondary: Some(("View All Projects", Section::Portfolio)),
};

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "ecommerce-platform",
        title: "E-commerce Platform",
        description: "A modern, responsive e-commerce platform built with Next.js and Stripe integration, featuring real-time inventory management and advanced analytics.",
        tags: &[ProjectTag::Web],
        technologies: &["Next.js", "React", "TypeScript", "Stripe", "MongoDB"],
        links: ProjectLinks {
            live: Some("https://example.com"),
            source: Some("https://github.com/example"),
        },
        metrics: &[
            Metric { label: "Conversion Rate", value: "+300%", icon: Icon::TrendingUp },
            Metric { label: "Page Speed", value: "95/100", icon: Icon::Zap },
            Metric { label: "Monthly Users", value: "50K+", icon: Icon::Users },
        ],
        featured: true,
        year: 2024,
        client: "TechStart Inc.",
    },
    Project {
        id: "mobile-fitness-app",
        title: "Fitness Tracking App",
        description: "Cross-platform mobile application for fitness tracking with real-time workout monitoring, social features, and personalized training plans.",
        tags: &[ProjectTag::App],
        technologies: &["React Native", "Firebase", "Node.js", "GraphQL"],
        links: ProjectLinks { live: Some("https://example.com"), source: None },
        metrics: &[
            Metric { label: "App Store Rating", value: "4.8/5", icon: Icon::Award },
            Metric { label: "Downloads", value: "100K+", icon: Icon::Eye },
            Metric { label: "User Retention", value: "85%", icon: Icon::Users },
        ],
        featured: true,
        year: 2024,
        client: "FitLife Corp",
    },
    Project {
        id: "digital-marketing-campaign",
        title: "Digital Marketing Suite",
        description: "Comprehensive digital marketing campaign that increased brand awareness by 400% and generated over $2M in revenue within 6 months.",
        tags: &[ProjectTag::Marketing],
        technologies: &["Google Ads", "Facebook Ads", "Analytics", "HubSpot"],
        links: ProjectLinks { live: None, source: None },
        metrics: &[
            Metric { label: "ROI Increase", value: "+400%", icon: Icon::TrendingUp },
            Metric { label: "Lead Generation", value: "10K+", icon: Icon::Users },
            Metric { label: "Brand Reach", value: "2M+", icon: Icon::Eye },
        ],
        featured: true,
        year: 2023,
        client: "GrowthCo",
    },
    Project {
        id: "healthcare-portal",
        title: "Healthcare Management Portal",
        description: "Secure healthcare management system with patient records, appointment scheduling, and telemedicine capabilities.",
        tags: &[ProjectTag::Web],
        technologies: &["React", "Node.js", "PostgreSQL", "Socket.io"],
        links: ProjectLinks { live: Some("https://example.com"), source: None },
        metrics: &[
            Metric { label: "Patient Satisfaction", value: "98%", icon: Icon::Award },
            Metric { label: "Appointment Efficiency", value: "+250%", icon: Icon::Zap },
            Metric { label: "Users", value: "25K+", icon: Icon::Users },
        ],
        featured: false,
        year: 2023,
        client: "HealthTech Solutions",
    },
    Project {
        id: "food-delivery-app",
        title: "Food Delivery Platform",
        description: "Complete food delivery ecosystem with customer app, restaurant dashboard, and delivery driver interface.",
        tags: &[ProjectTag::App, ProjectTag::Web],
        technologies: &["Flutter", "Django", "PostgreSQL", "Redis"],
        links: ProjectLinks { live: Some("https://example.com"), source: None },
        metrics: &[
            Metric { label: "Orders Daily", value: "5K+", icon: Icon::TrendingUp },
            Metric { label: "Restaurant Partners", value: "500+", icon: Icon::Users },
            Metric { label: "Delivery Time", value: "25 min avg", icon: Icon::Zap },
        ],
        featured: false,
        year: 2023,
        client: "FoodLink",
    },
    Project {
        id: "staffing-management",
        title: "Domestic Staffing Solution",
        description: "AI-powered domestic staffing platform that matches households with qualified personnel, featuring background checks and skill assessments.",
        tags: &[ProjectTag::Staffing, ProjectTag::Web],
        technologies: &["Next.js", "Python", "AI/ML", "PostgreSQL"],
        links: ProjectLinks { live: Some("https://example.com"), source: None },
        metrics: &[
            Metric { label: "Successful Placements", value: "1K+", icon: Icon::Award },
            Metric { label: "Client Satisfaction", value: "96%", icon: Icon::Users },
            Metric { label: "Response Time", value: "2 hrs avg", icon: Icon::Zap },
        ],
        featured: false,
        year: 2024,
        client: "HomeEase",
    },
];

// ------ Contact ------

pub static CONTACT_INTRO: SectionIntro = SectionIntro {
    badge: "Get In Touch",
    title: "Let's Start Your",
    highlight: "Digital Journey",
    lead: "Ready to transform your business? Get in touch with our team and let's discuss how we can help you achieve your goals.",
};

pub static CONTACT_FORM_HEADING: Subheading = Subheading {
    title: "Send us a message",
    subtitle: "Fill out the form below and we'll get back to you as soon as possible.",
};

pub static CONTACT_CHANNELS_HEADING: Subheading = Subheading {
    title: "Get in touch with us",
    subtitle: "We're here to help you bring your digital vision to life. Reach out through any of these channels.",
};

pub static CONTACT_FEATURES_HEADING: Subheading = Subheading {
    title: "Why Choose Us?",
    subtitle: "Experience the difference of working with industry experts",
};

pub static CONTACT_SUCCESS: Subheading = Subheading {
    title: "Thank You!",
    subtitle: "Your message has been sent successfully. We'll get back to you within 24 hours.",
};

pub static CONTACT_CTA: CallToAction = CallToAction {
    title: "Ready to Get Started?",
    body: "Schedule a free consultation today and let's discuss how we can help transform your business with our digital solutions.",
    primary: ("Schedule Consultation", Section::Contact),
    secondary: Some(("View Our Services", Section::Services)),
};

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Phone,
        title: "Phone",
        details: &["+1 (555) 123-4567", "+1 (555) 987-6543"],
        description: "Mon-Fri 9AM-6PM EST",
    },
    ContactChannel {
        icon: Icon::Mail,
        title: "Email",
        details: &["hello@capablegroups.com", "support@capablegroups.com"],
        description: "We'll respond within 24 hours",
    },
    ContactChannel {
        icon: Icon::MapPin,
        title: "Offices",
        details: &["New York, NY", "Los Angeles, CA", "Austin, TX"],
        description: "Multiple locations across the US",
    },
];

pub static SERVICE_OPTIONS: [&str; 8] = [
    "Web Development",
    "App Development",
    "Digital Marketing",
    "Domestic Staffing",
    "UI/UX Design",
    "E-commerce Solutions",
    "SEO & Analytics",
    "Other",
];

pub static BUDGET_RANGES: [&str; 5] = [
    "Under $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000 - $100,000",
    "$100,000+",
];

pub static CONTACT_SOCIALS: [SocialLink; 4] = [
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "https://linkedin.com", brand_color: None },
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "https://twitter.com", brand_color: None },
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "https://instagram.com", brand_color: None },
    SocialLink { icon: Icon::Facebook, label: "Facebook", href: "https://facebook.com", brand_color: None },
];

pub static CONTACT_FEATURES: [Highlight; 4] = [
    Highlight { icon: Icon::Zap, title: "Quick Response", description: "We respond to all inquiries within 24 hours" },
    Highlight { icon: Icon::Users, title: "Dedicated Team", description: "Your project gets a dedicated team of experts" },
    Highlight { icon: Icon::CheckCircle, title: "Free Consultation", description: "Initial consultation and project assessment at no cost" },
    Highlight { icon: Icon::Globe, title: "Remote Collaboration", description: "We work seamlessly with clients worldwide" },
];

// ------ Footer ------

pub static NEWSLETTER: Subheading = Subheading {
    title: "Stay Updated with Our Latest Insights",
    subtitle: "Subscribe to our newsletter for industry insights, project updates, and exclusive tips on digital transformation.",
};

pub static NEWSLETTER_FINE_PRINT: &str = "No spam, unsubscribe at any time. We respect your privacy.";

pub static FOOTER_BLURB: &str = "Leading digital agency specializing in web development, mobile apps, digital marketing, and staffing solutions.";

pub static FOOTER_LINK_GROUPS: [FooterLinkGroup; 3] = [
    FooterLinkGroup {
        title: "Services",
        links: &[
            FooterLink { label: "Web Development", target: LinkTarget::Section(Section::Services) },
            FooterLink { label: "App Development", target: LinkTarget::Section(Section::Services) },
            FooterLink { label: "Digital Marketing", target: LinkTarget::Section(Section::Services) },
            FooterLink { label: "Domestic Staffing", target: LinkTarget::Section(Section::Services) },
            FooterLink { label: "UI/UX Design", target: LinkTarget::Section(Section::Services) },
            FooterLink { label: "E-commerce Solutions", target: LinkTarget::Section(Section::Services) },
        ],
    },
    FooterLinkGroup {
        title: "Company",
        links: &[
            FooterLink { label: "About Us", target: LinkTarget::Section(Section::About) },
            FooterLink { label: "Our Team", target: LinkTarget::Section(Section::About) },
            FooterLink { label: "Careers", target: LinkTarget::Page("/careers") },
            FooterLink { label: "Blog", target: LinkTarget::Page("/blog") },
            FooterLink { label: "Case Studies", target: LinkTarget::Section(Section::Portfolio) },
            FooterLink { label: "Testimonials", target: LinkTarget::Section(Section::About) },
        ],
    },
    FooterLinkGroup {
        title: "Support",
        links: &[
            FooterLink { label: "Contact Us", target: LinkTarget::Section(Section::Contact) },
            FooterLink { label: "Support Center", target: LinkTarget::Page("/support") },
            FooterLink { label: "Live Chat", target: LinkTarget::Section(Section::Contact) },
            FooterLink { label: "Schedule Call", target: LinkTarget::Section(Section::Contact) },
            FooterLink { label: "FAQ", target: LinkTarget::Page("/faq") },
            FooterLink { label: "Technical Support", target: LinkTarget::Page("/tech-support") },
        ],
    },
];

pub static FOOTER_SOCIALS: [SocialLink; 6] = [
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com/company/capable-groups",
        brand_color: Some("#0077B5"),
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        href: "https://twitter.com/capablegroups",
        brand_color: Some("#1DA1F2"),
    },
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram",
        href: "https://instagram.com/capablegroups",
        brand_color: Some("#E4405F"),
    },
    SocialLink {
        icon: Icon::Facebook,
        label: "Facebook",
        href: "https://facebook.com/capablegroups",
        brand_color: Some("#1877F2"),
    },
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com/capable-groups",
        brand_color: Some("#333333"),
    },
    SocialLink {
        icon: Icon::Youtube,
        label: "YouTube",
        href: "https://youtube.com/@capablegroups",
        brand_color: Some("#FF0000"),
    },
];

pub static FOOTER_CONTACT: [FooterContact; 3] = [
    FooterContact {
        icon: Icon::Phone,
        text: "+1 (555) 123-4567",
        target: LinkTarget::External("tel:+15551234567"),
    },
    FooterContact {
        icon: Icon::Mail,
        text: "hello@capablegroups.com",
        target: LinkTarget::External("mailto:hello@capablegroups.com"),
    },
    FooterContact {
        icon: Icon::MapPin,
        text: "New York, NY • Los Angeles, CA",
        target: LinkTarget::Section(Section::Contact),
    },
];

pub static LEGAL_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Privacy Policy", target: LinkTarget::Page("/privacy") },
    FooterLink { label: "Terms of Service", target: LinkTarget::Page("/terms") },
    FooterLink { label: "Cookie Policy", target: LinkTarget::Page("/cookies") },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut ids = PROJECTS.iter().map(|project| project.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_has_at_least_one_tag() {
        assert!(PROJECTS.iter().all(|project| project.primary_tag().is_some()));
    }

    #[test]
    fn testimonial_ratings_are_within_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn milestones_are_chronological() {
        assert!(MILESTONES.windows(2).all(|pair| pair[0].year < pair[1].year));
    }

    #[test]
    fn only_http_links_open_a_new_tab() {
        assert!(LinkTarget::External("https://linkedin.com").opens_new_tab());
        assert!(!LinkTarget::External("mailto:hello@capablegroups.com").opens_new_tab());
        assert!(!LinkTarget::Page("/faq").opens_new_tab());
        assert_eq!(LinkTarget::Section(Section::Contact).href(), "#contact");
    }
}
