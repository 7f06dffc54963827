use serde::Serialize;

pub const NAME: &str = "Lokesh Sharma";
pub const ROLE: &str = "Senior Software Engineer";

pub const TAGLINE: &str = "A Full Stack Developer skilled in building and optimizing both \
frontend and backend applications. He ensures seamless performance, integration, and user \
experience across web platforms.";

pub const EMAIL: &str = "sharma.lokesh.222001@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/lokeshsixberries";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/lokeshsharma9895/";
pub const PORTRAIT: &str = "/assets/portrait.png";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am a passionate Full Stack Developer with a strong focus on building seamless, \
high-performing, and visually stunning web experiences. From crafting intuitive user \
interfaces to optimizing backend functionality, I thrive on turning ideas into reality \
through clean and efficient code.",
    "Currently, I am focused on full stack development with a strong emphasis on building \
dynamic user interfaces. I also have experience with server-side services and databases, \
enabling me to develop and optimize end-to-end applications. I enjoy solving complex \
problems and collaborating with multidisciplinary teams.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "3+",
            label: "Years of experience",
        },
        Stat {
            value: "10+",
            label: "Projects completed",
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Frontend",
            items: &[
                "React",
                "Next.js",
                "JavaScript",
                "TypeScript",
                "Webpack",
                "Tailwind CSS",
                "Redux",
                "Material-UI",
                "Apollo GraphQL",
                "SASS",
                "Vite",
            ],
        },
        SkillGroup {
            category: "Backend",
            items: &[
                "Node.js",
                "Express",
                "WebSockets",
                "MongoDB",
                "OAuth 2.0",
                "Redis",
                "Firebase",
                "REST API",
                "GraphQL",
                "JWT Authentication",
                "Microservices",
            ],
        },
        SkillGroup {
            category: "Tools",
            items: &[
                "Git",
                "GitHub",
                "Docker",
                "Postman",
                "VS Code",
                "Figma",
                "JIRA",
                "CI/CD",
                "Nginx",
                "Linux",
                "GitLab",
            ],
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github: &'static str,
    pub demo: &'static str,
}

// number of catalog entries surfaced on the home page
const FEATURED_COUNT: usize = 3;

pub fn all_projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-commerce App",
            description: "A commerce application with a shopping cart and payment gateway.",
            technologies: &["React", "Node.js", "MongoDB"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
        Project {
            title: "Task Manager",
            description: "A task management application with drag and drop functionality.",
            technologies: &["JavaScript", "HTML", "CSS"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
        Project {
            title: "Weather App",
            description: "A weather application that displays current and forecasted weather \
using an external API.",
            technologies: &["React", "API REST", "Tailwind CSS"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
        Project {
            title: "Chat Application",
            description: "A real-time chat application with rooms, presence, and message \
history.",
            technologies: &["Node.js", "Socket.io", "Redis"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
        Project {
            title: "Blog CMS",
            description: "A content management system for publishing articles with a rich \
text editor and tagging.",
            technologies: &["Next.js", "GraphQL", "MongoDB"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
        Project {
            title: "Portfolio Website",
            description: "This site: a single-page portfolio with scroll-aware navigation \
and a light/dark theme.",
            technologies: &["Rust", "Dioxus", "WASM"],
            image: "/assets/placeholder.svg",
            github: "#",
            demo: "#",
        },
    ]
}

pub fn featured_projects() -> Vec<Project> {
    all_projects().into_iter().take(FEATURED_COUNT).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            period: "2018 - 2022",
            title: "Bachelor of Technology (BTech) in Computer Science",
            institution: "Geetanjali Institute of Technical Studies, Udaipur",
            description: "Gained a strong foundation in computer science, mastering web \
development, data structures, algorithms, and system design. Achieved an impressive \
9.20 SGPA.",
        },
        EducationEntry {
            period: "2022 - 2024",
            title: "Frontend Developer",
            institution: "SixBerries Ltd.",
            description: "Designed and developed seamless user interfaces, ensuring a smooth \
user experience. Integrated REST APIs, optimized performance, and collaborated on \
full-stack solutions.",
        },
        EducationEntry {
            period: "2024 - Present",
            title: "Full Stack Developer",
            institution: "SixBerries Ltd.",
            description: "Leading the development of scalable full-stack applications with \
dynamic frontends and efficient backend services. Focused on API integrations, performance \
enhancements, and delivering high-quality web experiences.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_projects_lead_the_catalog() {
        let all = all_projects();
        let featured = featured_projects();
        assert!(featured.len() <= all.len());
        assert_eq!(featured.as_slice(), &all[..featured.len()]);
    }

    #[test]
    fn test_skill_groups_are_populated() {
        let groups = skill_groups();
        assert_eq!(groups.len(), 3);
        for group in groups {
            assert!(!group.items.is_empty(), "empty group {}", group.category);
        }
    }

    #[test]
    fn test_education_is_populated() {
        assert_eq!(education().len(), 3);
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_string(&all_projects()).unwrap();
        assert!(json.contains("E-commerce App"));
    }
}
