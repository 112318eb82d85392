//! Static copy rendered by the pages.
//!
//! Everything here is compile-time data. Pages iterate over these tables
//! instead of hard-coding markup so the copy lives in one place.

use magmist_conversation::build_handoff_url;

/// Studio contact details.
pub mod studio {
    pub const NAME: &str = "SCADE Studio";
    pub const EMAIL: &str = "scade.magmist@gmail.com";
    pub const PHONE_DISPLAY: &str = "+91 7411532800";
    pub const PHONE_TEL: &str = "tel:+917411532800";
    /// WhatsApp number for page call-to-action links.
    pub const WHATSAPP: &str = "917411532800";
    pub const CITY: &str = "Mysore, Karnataka, India";
    pub const MAPS_URL: &str = "https://maps.google.com/?q=Mysore,+Karnataka";
    pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3897.597!2d76.639381!3d12.295810!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTLCsDE3JzQ1LjAiTiA3NsKwMzgnMjEuOCJF!5e0!3m2!1sen!2sin!4v1690000000000";
    pub const HOURS: &str = "Mon\u{2013}Sat, 9 AM \u{2013} 6 PM IST";
    pub const TAGLINE: &str = "Water from Air, Health in Every Drop.";
}

/// Pre-filled WhatsApp messages used by page call-to-action buttons.
pub mod prefill {
    pub const START_CONVERSATION: &str =
        "Hi SCADE Team! I want to start a conversation. Can we chat?";
    pub const BECOME_PARTNER: &str = "Hi SCADE Team! I'm interested in becoming a partner (dealer, distributor, or collaborator). Can we discuss opportunities?";
    pub const GET_MAGMIST: &str = "Hi SCADE Team! I want to know more about Magmist.";
}

/// WhatsApp link to the studio with the given opening message.
#[must_use]
pub fn studio_whatsapp(prefilled_text: &str) -> String {
    build_handoff_url(studio::WHATSAPP, prefilled_text)
}

/// A titled blurb used by card grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

const fn feature(title: &'static str, description: &'static str) -> Feature {
    Feature { title, description }
}

/// A headline number on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PRINCIPLES: [Feature; 4] = [
    feature(
        "Magmist",
        "Transforming air into pure, alkaline, mineral-rich water.",
    ),
    feature(
        "Health First",
        "Driven by science, care, and a mission to enhance human health.",
    ),
    feature(
        "Eco Innovation",
        "Committed to protecting the planet and promoting sustainable living.",
    ),
    feature(
        "Pillar Tech",
        "Built on Precision, Reliability, Advanced Solutions, innovation, health & planet here.",
    ),
];

pub const FLAGSHIP_POINTS: [Feature; 4] = [
    feature(
        "Alkaline Purity",
        "pH 8.5+ for optimal balance and detoxification.",
    ),
    feature(
        "Mineral Enriched",
        "Includes essential trace minerals like Calcium (Ca), Magnesium (Mg), Iron (Fe), Zinc (Zn), and Copper (Cu).",
    ),
    feature(
        "Health & Taste",
        "Minerals are balanced for superior taste and enhanced health benefits.",
    ),
    feature(
        "Eco-Conscious",
        "Zero plastic, powered by clean energy options for a sustainable footprint.",
    ),
];

pub const STATS: [Stat; 3] = [
    Stat {
        value: "4.9/5",
        label: "Verified Customer Rating",
    },
    Stat {
        value: "100K+",
        label: "Plastic Bottles Saved",
    },
    Stat {
        value: "20+",
        label: "Active R&D Patents",
    },
];

pub const PILLARS: [Feature; 3] = [
    feature(
        "Precision",
        "Every design, process, and product is crafted with scientific accuracy and technical excellence.",
    ),
    feature(
        "Reliability",
        "Tested, trusted, and built to perform flawlessly in real-world conditions.",
    ),
    feature(
        "Advanced Solutions",
        "Fusing healthcare expertise with cutting-edge engineering to solve real human needs.",
    ),
];

pub const MAGMIST_BENEFITS: [&str; 10] = [
    "Turns Air into Water",
    "Zero Water Wastage",
    "Low Power Consumption",
    "Smart Technology",
    "Mineral & Alkaline Enrichment",
    "Plug-and-Play Setup",
    "Reliable During Emergencies",
    "Eco-Friendly Operation",
    "Built for Durability",
    "Perfect for All Environments",
];

pub const HEALTH_BENEFITS: [Feature; 6] = [
    feature(
        "Balances Body pH",
        "Neutralizes acidity and helps maintain optimal metabolic health.",
    ),
    feature(
        "Supports Bone & Heart Health",
        "Provides essential minerals like calcium, magnesium, iron, copper and zinc.",
    ),
    feature(
        "Aids Detoxification",
        "Flushes out toxins and supports liver & kidney function.",
    ),
    feature(
        "Boosts Energy & Endurance",
        "Enhances hydration at a cellular level.",
    ),
    feature(
        "Reduces Stress & Fatigue",
        "Improves overall body function for vitality.",
    ),
    feature(
        "Promotes Healthy Skin",
        "Hydration from alkaline water helps maintain clear, glowing skin.",
    ),
];

pub const SCADE_REASONS: [Feature; 5] = [
    feature(
        "Scientifically Developed",
        "Designed with medical and engineering expertise.",
    ),
    feature(
        "Family-Founded, Value-Driven",
        "Rooted in trust, care, and community wellness.",
    ),
    feature(
        "Made in India, Built for the World",
        "Engineered in Mysore, ready to serve globally.",
    ),
    feature(
        "Committed to Sustainability",
        "Reducing water waste and promoting eco-conscious living.",
    ),
    feature(
        "Customer-Centric Service",
        "Reliable after-sales support and transparent communication.",
    ),
];

pub const PRODUCT_FEATURES: [Feature; 8] = [
    feature(
        "Air to Pure Water",
        "Extracts water from air \u{2014} endless supply, no source needed.",
    ),
    feature(
        "Zero Water Wastage",
        "100% efficient \u{2014} unlike RO systems that waste 70%+.",
    ),
    feature("Ultra-Low Power", "Uses less energy than a light bulb"),
    feature(
        "AI-Powered Purity",
        "Smart sensors monitor TDS, pH, and humidity in real-time.",
    ),
    feature(
        "Alkaline & Mineral-Rich",
        "pH 8.5\u{2013}9.5 with Fe, Cu & Zn \u{2014} optimal for immunity & hydration.",
    ),
    feature(
        "Plug & Drink",
        "No plumbing. Just plug in \u{2014} ready in under 5 minutes.",
    ),
    feature(
        "Crisis-Proof",
        "Works during droughts, disasters, or grid failures.",
    ),
    feature(
        "Plastic-Free Future",
        "Eliminates 10,000+ plastic bottles per unit annually.",
    ),
];

/// One product photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: [GalleryImage; 8] = [
    GalleryImage {
        src: "/assets/m1.jpg",
        alt: "Magmist \u{2013} Front View",
    },
    GalleryImage {
        src: "/assets/m2.jpg",
        alt: "Magmist \u{2013} Side Angle",
    },
    GalleryImage {
        src: "/assets/m3.jpg",
        alt: "Magmist \u{2013} Top View",
    },
    GalleryImage {
        src: "/assets/m4.jpg",
        alt: "Magmist \u{2013} Water Outlet",
    },
    GalleryImage {
        src: "/assets/m5.jpg",
        alt: "Magmist \u{2013} Control Panel",
    },
    GalleryImage {
        src: "/assets/m6.jpg",
        alt: "Magmist \u{2013} Mineral Cartridge",
    },
    GalleryImage {
        src: "/assets/m7.jpg",
        alt: "Magmist \u{2013} Portable Handle",
    },
    GalleryImage {
        src: "/assets/m8.jpg",
        alt: "Magmist \u{2013} LED Indicator",
    },
];

pub const DEMO_VIDEO: &str = "/assets/demo.mp4";

/// Markup for a muted, looping, inline autoplay video.
///
/// Browsers only autoplay muted video, so the flags are fixed.
#[must_use]
pub fn autoplay_video(src: &str, poster: Option<&str>) -> String {
    let poster = poster
        .map(|poster| format!(r#" poster="{poster}""#))
        .unwrap_or_default();
    format!(r#"<video src="{src}"{poster} autoplay loop muted playsinline preload="auto"></video>"#)
}

/// A person on the team page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub background: &'static str,
    pub contribution: &'static str,
    pub bio: &'static str,
    pub quote: &'static str,
}

pub const TEAM: [TeamMember; 5] = [
    TeamMember {
        name: "Dr. Chinmai V S",
        title: "PT, CTTS, CIASTMT, CDNT, CAFPCT, OMT",
        role: "Managing Director",
        background: "Physiotherapist with advanced certifications in manual therapy, dry needling, and functional rehabilitation.",
        contribution: "Visionary leader integrating medical science into product design. Oversees health validation, community outreach, and sustainable wellness programs.",
        bio: "25-year-old innovator blending healthcare with technology. Founder of SCADE with a mission to make health accessible through innovation. Mentors young professionals and runs hydration awareness workshops.",
        quote: "\u{201c}Reaching people through products that benefit their health.\u{201d}",
    },
    TeamMember {
        name: "Deekshi P",
        title: "Mechatronics Engineer",
        role: "Technical Head",
        background: "Expert in 3D modeling, CAD, Arduino programming, and smart system design.",
        contribution: "Leads Magmist R&D \u{2014} from prototype to production. Optimizes energy efficiency, integrates IoT sensors, and ensures durability in extreme conditions.",
        bio: "Passionate robotics engineer turning ideas into reality. Believes technology should serve human health. Enjoys open-source projects and teaching kids coding.",
        quote: "\u{201c}Health makes humans live happily.\u{201d}",
    },
    TeamMember {
        name: "Samartha V S",
        title: "Jr. Engineer (Aero & Marine)",
        role: "Marketing Head",
        background: "Diploma in Fire & Safety, Aeronautical, and Marine Engineering.",
        contribution: "Drives brand growth via digital campaigns, product demos, and NGO partnerships. Crafts science-backed marketing that resonates with families.",
        bio: "Safety expert turned storyteller. Uses engineering insight to explain complex tech simply. Loves public speaking and community impact events.",
        quote: "\u{201c}Innovating safety and health for every home.\u{201d}",
    },
    TeamMember {
        name: "Anuradha D R",
        title: "Family Pillar",
        role: "Financial Management",
        background: "Mother of Dr. Chinmai & Samartha. Guardian of family values.",
        contribution: "Manages budgets, investments, and ethical finance. Ensures long-term sustainability and funds community health initiatives.",
        bio: "Nurturing leader with deep belief in preventive wellness. Advocates natural living, gardening, and passing down health wisdom to the next generation.",
        quote: "\u{201c}A mother always expects a healthy lifestyle.\u{201d}",
    },
    TeamMember {
        name: "Savitha",
        title: "Family Anchor",
        role: "Financial Management",
        background: "Mother of Deekshi P. Champion of essential resources.",
        contribution: "Oversees cash flow, cost control, and investor trust. Supports eco-tech investments aligned with clean water access for all.",
        bio: "Community-minded matriarch who sees water, food, and family as life\u{2019}s foundation. Believes small innovations create big change.",
        quote: "\u{201c}Water is a basic essential with multiple benefits.\u{201d}",
    },
];

/// An outbound link with an accessible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [ExternalLink; 4] = [
    ExternalLink {
        label: "LinkedIn",
        url: "https://linkedin.com",
    },
    ExternalLink {
        label: "Instagram",
        url: "https://instagram.com",
    },
    ExternalLink {
        label: "Twitter",
        url: "https://twitter.com",
    },
    ExternalLink {
        label: "Facebook",
        url: "https://facebook.com",
    },
];

pub const FOOTER_CREDIT: ExternalLink = ExternalLink {
    label: "Legal Papers India",
    url: "https://www.legalpapersindia.com/",
};
