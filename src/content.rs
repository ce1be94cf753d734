// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content shown on the non-gallery pages.
//!
//! Text here is content, not UI chrome, so it is not routed through Fluent.

/// Owner of the portfolio.
pub const OWNER_NAME: &str = "Gautam Naugai";

/// Roles listed under the name on the home page.
pub const ROLES: &[&str] = &[
    "Frontend Developer",
    "Technical Project Management",
    "Backend Developer",
    "Video Editor",
    "Full Stack Developer",
];

/// Headline figures on the home page, as (label, value).
pub const STATS: &[(&str, &str)] = &[("Experience", "1.5+ Years"), ("Completed", "10+ Projects")];

/// Public profiles, as (label, url).
pub const PROFILES: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/Gautamchandar"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/gautam-naugai-1a72a5275/",
    ),
    ("X", "https://x.com/NaugaiGautam"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub source_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "603 Work Ved",
        description: "Our platform offers a seamless way for individuals and businesses to book \
                      exquisite spaces tailored to their unique needs and aesthetic preferences.",
        tags: &["HTML5", "CSS3", "JavaScript"],
        source_url: Some("https://github.com/Gautamchandar/603WorkVed"),
        live_url: Some("https://603-work-ved.vercel.app/"),
    },
    Project {
        name: "IIPA Dashboard PowerBI",
        description: "I designed and developed an interactive Power BI dashboard to visualize \
                      complex data, enabling insights, data-driven decision-making processes.",
        tags: &["Ms Excel", "PowerBI"],
        source_url: None,
        live_url: Some(
            "https://drive.google.com/drive/folders/1axATOj08-DhBzdhUshql-HsqCjQ6-l8k?usp=sharing",
        ),
    },
    Project {
        name: "Hair Care UI",
        description: "Demi Hair Care offers premium, science-backed products for stronger, \
                      shinier hair, nourishing roots, repairing damage confidence naturally.",
        tags: &["React Js", "MySQL", "TailwindCSS"],
        source_url: Some("https://github.com/Gautamchandar/demi-app"),
        live_url: Some("https://demi-app.vercel.app/"),
    },
    Project {
        name: "Thanks to IIPA Officers",
        description: "Heartfelt thanks to IIPA officers for guiding me throughout the journey, \
                      providing constant support and motivation at every step.",
        tags: &["React Js", "TailwindCSS"],
        source_url: Some("https://github.com/Gautamchandar/thanksofficers"),
        live_url: Some("https://thanksofficers.vercel.app/"),
    },
    Project {
        name: "R & D Dummy ProtoType",
        description: "A dummy R&D prototype designed to showcase research projects, innovation \
                      models, and scalable digital transformation concepts.",
        tags: &["React Js", "TailwindCSS"],
        source_url: Some("https://github.com/Gautamchandar/rndprototype"),
        live_url: Some("https://rndpage.vercel.app/"),
    },
];

/// Skills grouped under one heading on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// Introduction paragraphs on the about page.
pub const OVERVIEW: &[&str] = &[
    "I am a motivated and detail-oriented Web Developer with hands-on experience in Technical \
     Project Management and frontend development.",
    "During my tenure at the Indian Institute of Public Administration (IIPA), under the guidance \
     of Prof. Charru Malhotra, I worked on technical project management initiatives and built an \
     interactive dashboard using Power BI and Next.js to enable data-driven decision-making.",
    "Currently, I work as a Web Developer at IIPA, where I focus on creating responsive, scalable, \
     and user-centric web applications.",
    "I am an IBM SkillsBuild-certified Frontend Developer and an active open-source contributor, \
     having worked on 5+ projects under SWOC'25.",
    "I am curious, growth-driven, and always open to collaborating with like-minded individuals \
     on meaningful tech solutions.",
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        skills: &["HTML5", "CSS3", "JavaScript", "React JS", "Next JS"],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &["Node JS", "Express", "Java", "Spring Boot"],
    },
    SkillGroup {
        title: "Database Systems",
        skills: &["PostgreSQL", "MongoDB", "MySQL"],
    },
    SkillGroup {
        title: "Tools & Analytics",
        skills: &["Git", "Github", "VS Code", "Power BI"],
    },
    SkillGroup {
        title: "Video Editing Tool",
        skills: &["Premiere Pro", "VN App"],
    },
    SkillGroup {
        title: "AI Tools",
        skills: &["ChatGPT", "Gemini", "Gamma"],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Web Developer | Technical Project Management",
        company: "Indian Institute of Public Administration",
        period: "July, 2025 - Present",
        points: &[
            "Handled complete UI/UX development for the Namami Gange module in the IIPA Dashboard website.",
            "Designed and edited all Namami Gange project videos using Adobe Premiere Pro.",
            "Developed and maintained project dashboards using Power BI for data visualization and insights.",
            "Integrated Power BI dashboards into the web platform for real-time project monitoring.",
        ],
    },
    Experience {
        title: "Open Source Contributor",
        company: "SWOC^25",
        period: "Jan 2025 - Mar 2025",
        points: &[
            "Contributed to 5+ projects using HTML, CSS, JavaScript, React.js, and GSAP to build interactive user interfaces.",
            "Implemented smooth animations and transitions using GSAP to enhance user experience.",
            "Participated in planning, development, testing, and UI refinement across multiple projects.",
            "Collaborated with like-minded developers and designers on team-based projects.",
        ],
    },
    Experience {
        title: "Frontend Developer",
        company: "IBM",
        period: "July 2024 - Aug 2024",
        points: &[
            "During this internship, developed a Virtual Assistant using HTML, CSS, and Vanilla JavaScript.",
            "Designed an interactive and user-friendly UI for seamless user interaction.",
            "Focused on clean structure, responsiveness, and performance optimization.",
            "Gained hands-on experience in frontend problem-solving and real-world application development.",
        ],
    },
    Experience {
        title: "Generative AI",
        company: "Google Cloud",
        period: "May 2024 - Jun 2024",
        points: &[
            "Successfully completed 10-12 hands-on labs on Google Cloud, covering Python, Generative AI, and Cloud Services using real-world scenarios.",
            "Gained practical experience with Generative AI using Vertex AI, including prompt design and model interaction.",
            "Tested and managed APIs using Google Cloud Console.",
            "Followed task-based lab instructions, executing environment setup, API configuration, model invocation, and result verification independently.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_tags_and_a_link() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.name);
            assert!(
                project.source_url.is_some() || project.live_url.is_some(),
                "{} has no link",
                project.name
            );
        }
    }

    #[test]
    fn skill_groups_are_non_empty_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty(), "{} has no skills", group.title);
            for skill in group.skills {
                assert!(seen.insert(*skill), "{skill} listed twice");
            }
        }
        assert_eq!(SKILL_GROUPS.len(), 6);
    }

    #[test]
    fn experiences_are_listed_newest_first() {
        assert_eq!(EXPERIENCES.first().map(|e| e.company), Some("Indian Institute of Public Administration"));
        assert!(EXPERIENCES.iter().all(|e| !e.points.is_empty()));
    }
}
