//! Fixed demo dataset used for template previews.

use crate::domain::{
    Education, Experience, PersonalInfo, PortfolioData, Project, Skill, SocialLinks,
    SocialPlatform, Testimonial,
};

const PORTRAIT_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIzMDAiIGhlaWdodD0iMzAwIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjYzRiNWZkIi8+PC9zdmc+";
const PROJECT_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSI2MDAiIGhlaWdodD0iNDAwIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjYTVmM2ZjIi8+PC9zdmc+";
const AVATAR_PLACEHOLDER: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxMDAiIGhlaWdodD0iMTAwIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZmJjZmU4Ii8+PC9zdmc+";

impl PortfolioData {
    /// A complete portfolio for previewing templates without user data.
    ///
    /// Every section is populated and every image is an embedded SVG
    /// placeholder, so the export needs nothing but the CDN assets.
    pub fn sample() -> Self {
        let mut personal_info = PersonalInfo::new(
            "Alex Morgan",
            "Full Stack Developer",
            "Developer with six years of experience shipping web applications. \
             Focused on React, Node.js and the tooling that keeps teams fast.",
        );
        personal_info.profile_image = Some(PORTRAIT_PLACEHOLDER.to_string());

        let skills = [
            ("JavaScript", 90),
            ("React", 85),
            ("Node.js", 80),
            ("TypeScript", 75),
            ("HTML/CSS", 95),
            ("Tailwind CSS", 90),
            ("GraphQL", 70),
            ("MongoDB", 75),
            ("PostgreSQL", 70),
            ("AWS", 65),
        ]
        .into_iter()
        .map(|(name, level)| Skill::new(name, level))
        .collect();

        let projects = vec![
            Project::new(
                "E-commerce Platform",
                "Storefront with product management, a persistent cart and payment processing.",
            )
            .with_link("https://example.com/storefront")
            .with_image(PROJECT_PLACEHOLDER),
            Project::new(
                "Task Board",
                "Collaborative task tracker with real-time updates and team workspaces.",
            )
            .with_link("https://example.com/task-board")
            .with_image(PROJECT_PLACEHOLDER),
            Project::new(
                "Weather Dashboard",
                "Interactive dashboard showing current conditions and forecasts for saved cities.",
            )
            .with_link("https://example.com/weather")
            .with_image(PROJECT_PLACEHOLDER),
        ];

        let social_links: SocialLinks = [
            (SocialPlatform::Github, "https://github.com/alexmorgan"),
            (SocialPlatform::Linkedin, "https://linkedin.com/in/alexmorgan"),
            (SocialPlatform::Twitter, "https://twitter.com/alexmorgan"),
            (SocialPlatform::Website, "https://alexmorgan.dev"),
        ]
        .into_iter()
        .map(|(platform, url)| (platform, url.to_string()))
        .collect();

        let testimonials = vec![
            Testimonial::new(
                "Sarah Williams",
                "Product Manager at TechCorp",
                "Alex delivered a product that exceeded our expectations, with real care for the details.",
            )
            .with_image(AVATAR_PLACEHOLDER),
            Testimonial::new(
                "Min Chen",
                "CTO at StartupX",
                "Alex understood our requirements quickly and shipped a solid solution on schedule.",
            )
            .with_image(AVATAR_PLACEHOLDER),
            Testimonial::new(
                "Emily Rodriguez",
                "Frontend Lead at DesignHub",
                "Clean, well-documented code. Alex makes every team they join better.",
            )
            .with_image(AVATAR_PLACEHOLDER),
        ];

        let education = vec![
            Education::new("Master of Computer Science", "Stanford University", "2018-2020")
                .with_description("Specialized in machine learning systems"),
            Education::new("B.Sc. Software Engineering", "MIT", "2014-2018")
                .with_description("Graduated with honors"),
        ];

        let experience = vec![
            Experience::new("Senior Frontend Developer", "TechCorp Inc.", "2020-Present")
                .with_description("Lead developer on the main product, managing a team of five."),
            Experience::new("Full Stack Developer", "StartupX", "2018-2020")
                .with_description("Built and maintained web applications with React and Node.js."),
            Experience::new("Junior Developer", "CodeLabs", "2016-2018")
                .with_description("Frontend work in HTML, CSS and JavaScript."),
        ];

        Self {
            personal_info,
            skills,
            projects,
            social_links,
            education,
            experience,
            testimonials,
            ..Self::new(PersonalInfo::default())
        }
    }
}
