//! Static site content.

pub const EVENT_TITLE: &str = "NASA Space Apps Challenge";
pub const BANNER: &str = "SPACE APPS";
pub const LOCATION: &str = "Jabalpur, India 2025";
pub const POWERED_BY: &str = "Unstop";
pub const FOOTER: &str = "© 2025 NASA Space Apps Challenge. All rights reserved.";

pub const CHALLENGES_URL: &str = "https://www.spaceappschallenge.org/2025/challenges/";
pub const LOCAL_EVENT_URL: &str = "https://www.spaceappschallenge.org/2025/local-events/jabalpur/";
pub const UNSTOP_URL: &str = "https://unstop.com/hackathons/nasa-space-apps-challenge-2025-jabalpur-edition-gyan-ganga-institute-of-technology-and-sciences-1543268";

/// Where a navigation link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Full URL outside the site.
    External(&'static str),
    /// Path on the event site.
    SitePath(&'static str),
    /// The team roster, reached with the `c` key.
    Team,
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Challenges",
        target: LinkTarget::External(CHALLENGES_URL),
    },
    NavLink {
        label: "Partners",
        target: LinkTarget::SitePath("/partners"),
    },
    NavLink {
        label: "Contact",
        target: LinkTarget::Team,
    },
];

pub const ABOUT_HEADING: &str = "About the Event & Participation";
pub const ABOUT_INTRO: &str = "Join the world's largest hackathon, bringing together coders, makers, \
designers, storytellers, and innovators from across the globe to solve real challenges faced by NASA.";

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Global Impact",
        description: "Be part of an international community solving space & Earth challenges.",
    },
    Feature {
        title: "Collaborative Innovation",
        description: "Work with diverse teams to create groundbreaking solutions.",
    },
    Feature {
        title: "NASA Recognition",
        description: "Get your ideas noticed by NASA scientists & experts.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is NASA Space Apps Challenge 2025?",
        answer: "The NASA International Space Apps Challenge is the world's largest annual \
hackathon engaging thousands of participants to solve global challenges with NASA's open data.",
    },
    FaqEntry {
        question: "Where is the Jabalpur event happening?",
        answer: "NASA Space Apps Jabalpur 2025 is a hybrid event: you can join virtually or \
attend in person at our designated Jabalpur venue.",
    },
    FaqEntry {
        question: "Who can participate?",
        answer: "Students, professionals, and space enthusiasts from all disciplines are welcome!",
    },
    FaqEntry {
        question: "How do I register?",
        answer: "Registration details are available on the official NASA Space Apps website and \
local Jabalpur organizers' channels.",
    },
    FaqEntry {
        question: "Is prior coding experience required?",
        answer: "No! Teams can include participants of all skill levels. Creativity and teamwork \
are key.",
    },
    FaqEntry {
        question: "Are there any prizes?",
        answer: "Yes, participants may receive global recognition, awards, and mentorship \
opportunities from NASA and partner organizations.",
    },
    FaqEntry {
        question: "Can I join remotely?",
        answer: "Absolutely! This hybrid event allows remote participation via online platforms.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamSection {
    pub title: &'static str,
    pub members: &'static [TeamMember],
}

pub const TEAM: &[TeamSection] = &[
    TeamSection {
        title: "Local Leads",
        members: &[
            TeamMember {
                name: "Nihal Yadav",
                role: "Lead - Northern",
            },
            TeamMember {
                name: "Mayank Aggrawal",
                role: "Lead - Eastern",
            },
        ],
    },
    TeamSection {
        title: "Media Team & PR",
        members: &[
            TeamMember {
                name: "Shailendra Yadav",
                role: "Content & Social Media",
            },
            TeamMember {
                name: "Moksh Mishra",
                role: "Video & Photography",
            },
        ],
    },
    TeamSection {
        title: "Graphics Team",
        members: &[
            TeamMember {
                name: "Ujjwal Patel",
                role: "Lead Designer",
            },
            TeamMember {
                name: "Vaanya Jain",
                role: "Motion Designer",
            },
        ],
    },
    TeamSection {
        title: "Technical Team",
        members: &[
            TeamMember {
                name: "Sayman Lal",
                role: "Frontend Dev",
            },
            TeamMember {
                name: "Aadeesh Jain",
                role: "Backend Dev",
            },
        ],
    },
];
