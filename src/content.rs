//! Embedded portfolio content.
//!
//! The profile and catalog are fixed literals compiled into the binary; this
//! is a presentation of one person's portfolio, not a content-management
//! system.

use crate::models::{
    Category, ContactChannel, Experience, Profile, Project, SkillGroup, SocialLink,
};

/// Builds the embedded profile.
#[must_use]
pub fn default_profile() -> Profile {
    Profile {
        name: "Rizko Rachmayadi".to_string(),
        role: "IT Enthusiast".to_string(),
        tagline: "Cybersecurity | Full-Stack Developer | UI/UX Designer | Data Scientist"
            .to_string(),
        summary: "Passionate about creating secure, innovative solutions that bridge \
                  technology and user experience."
            .to_string(),
        bio: vec![
            "I'm a versatile technology professional with a unique blend of skills spanning \
             cybersecurity, full-stack development, UI/UX design, and data science. My journey \
             began with a fascination for how technology can solve real-world problems while \
             maintaining security and user-centric design."
                .to_string(),
            "My interdisciplinary approach allows me to create holistic solutions that are not \
             only technically sound and secure but also intuitive and data-driven. I believe in \
             the power of combining multiple domains to deliver exceptional results."
                .to_string(),
        ],
        location: "Surabaya, Indonesia".to_string(),
        experience_badge: "1+ years experience".to_string(),
        skills: vec![
            SkillGroup {
                category: Category::Cybersecurity,
                skills: vec![
                    "Penetration Testing".to_string(),
                    "Vulnerability Assessment".to_string(),
                    "Incident Response".to_string(),
                ],
            },
            SkillGroup {
                category: Category::Development,
                skills: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Python".to_string(),
                    "TypeScript".to_string(),
                    "PostgreSQL".to_string(),
                    "PHP".to_string(),
                    "Laravel".to_string(),
                    "Docker".to_string(),
                ],
            },
            SkillGroup {
                category: Category::Design,
                skills: vec!["Figma".to_string()],
            },
            SkillGroup {
                category: Category::Data,
                skills: vec![
                    "Python".to_string(),
                    "SQL".to_string(),
                    "Power BI".to_string(),
                    "Machine Learning".to_string(),
                    "Statistical Analysis".to_string(),
                ],
            },
        ],
        timeline: vec![Experience {
            period: "2023-2024".to_string(),
            role: "Vulnerability Assessment".to_string(),
            organization: "PT Visionet Data Internasional".to_string(),
            description: "Identifying, quantifying, and prioritizing the vulnerabilities in a \
                          system to provide a comprehensive view of the security risks it \
                          faces, helping organizations understand what weaknesses they have \
                          and how to fix them."
                .to_string(),
        }],
        channels: vec![
            ContactChannel {
                label: "Email".to_string(),
                value: "rizkofebry@gmail.com".to_string(),
                href: Some("mailto:rizkofebry@gmail.com".to_string()),
            },
            ContactChannel {
                label: "Phone".to_string(),
                value: "+62 822-6400-6002".to_string(),
                href: Some("https://wa.me/+6282264006002".to_string()),
            },
            ContactChannel {
                label: "Location".to_string(),
                value: "Surabaya, Indonesia".to_string(),
                href: None,
            },
        ],
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                href: "https://github.com/rizko-d".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                href: "https://www.linkedin.com/in/rizkofebri/".to_string(),
            },
        ],
        availability: "Available for freelance projects".to_string(),
        footer: "© 2025 Rizko Rachmayadi. All rights reserved.".to_string(),
    }
}

/// Builds the embedded project catalog, in gallery order.
#[must_use]
pub fn default_catalog() -> Vec<Project> {
    vec![
        Project::new(
            "ecommerce-api",
            "Backend API Development with Payment Gateway Integration",
            "Build Backend APIs for e-commerce businesses using PHP and Laravel. Integrate \
             payment gateways like DOKU, and Authorize for secure transactions.",
            Category::Development,
            "https://i.pinimg.com/736x/fe/d7/9a/fed79a9c659b8c286507b89c9ab1cc60.jpg",
        )
        .with_technologies(["PHP", "Laravel", "PostgreSQL", "Railway"])
        .with_live_url("https://web-production-e35b7.up.railway.app/")
        .with_source_url("https://github.com/rizko-d/ecommerce-api")
        .featured(),
        Project::new(
            "checkout-redesign",
            "Checkout Flow Redesign",
            "End-to-end redesign of an e-commerce checkout: journey mapping, wireframes, and \
             a high-fidelity component library validated with usability sessions.",
            Category::Design,
            "https://i.pinimg.com/736x/2c/5a/31/2c5a31a4b9e5b0c2b4a6f2b81c2d94a0.jpg",
        )
        .with_technologies(["Figma", "Design Tokens", "Prototyping"])
        .with_document_url("https://rizko-d.github.io/case-studies/checkout-redesign")
        .with_design_tool_url("https://www.figma.com/design/checkout-flow-redesign"),
    ]
}
