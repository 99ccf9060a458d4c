use crate::models::record::{
    Certificate, Education, Experience, Header, Language, Project, Record,
};
use crate::models::skills::SkillMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Record {
    /// The record rendered when `CVGEN_RECORD` is not set.
    pub fn builtin() -> Self {
        let skills: SkillMap = [
            (
                "frontend",
                strings(&["React", "Angular", "TypeScript", "HTML5", "CSS3", "Tailwind CSS"]),
            ),
            (
                "backend",
                strings(&["Node.js", "Express.js", "Python", "Django", "REST APIs"]),
            ),
            ("database", strings(&["PostgreSQL", "MongoDB", "Redis"])),
            ("tools", strings(&["Git", "Docker", "Vercel", "Postman"])),
        ]
        .into_iter()
        .collect();

        Record {
            header: Header {
                name: "Alex Morgan".to_string(),
                title: "Full Stack Developer".to_string(),
                email: "alex.morgan@example.com".to_string(),
                phone: Some("+1 555 0100".to_string()),
                location: Some("Remote".to_string()),
                linkedin: Some("https://linkedin.com/in/alex-morgan-example".to_string()),
                github: Some("https://github.com/alex-morgan-example".to_string()),
                portfolio: None,
                cv_url: None,
            },
            summary: Some(
                "Full stack developer building responsive web applications and RESTful APIs. \
                 Comfortable across the stack, from component design to database tuning, \
                 and focused on clean, maintainable code."
                    .to_string(),
            ),
            skills,
            projects: vec![
                Project {
                    name: "Storefront Demo".to_string(),
                    description: Some(
                        "E-commerce storefront with product catalog, cart and checkout flow."
                            .to_string(),
                    ),
                    code_url: Some("https://github.com/alex-morgan-example/storefront".to_string()),
                    live_url: Some("https://alex-morgan-example.github.io/storefront/".to_string()),
                    technologies: strings(&["React", "JavaScript", "CSS3"]),
                    features: Some(strings(&[
                        "Product catalog",
                        "Shopping cart",
                        "Responsive design",
                    ])),
                    status: Some("Live".to_string()),
                },
                Project {
                    name: "Quiz Platform".to_string(),
                    description: Some(
                        "Multilingual quiz application with server-side rendering.".to_string(),
                    ),
                    code_url: Some("https://github.com/alex-morgan-example/quiz".to_string()),
                    live_url: Some("https://quiz-example.vercel.app".to_string()),
                    technologies: strings(&["Next.js", "TypeScript", "Tailwind CSS"]),
                    features: Some(strings(&["JSON-based quizzes", "Multilingual support", "SSR"])),
                    status: None,
                },
                Project {
                    name: "Recipes App".to_string(),
                    description: Some("Recipe manager with categories and search.".to_string()),
                    code_url: Some("https://github.com/alex-morgan-example/recipes".to_string()),
                    live_url: None,
                    technologies: strings(&["React", "JavaScript"]),
                    features: None,
                    status: None,
                },
            ],
            experience: vec![
                Experience {
                    title: "Full Stack Developer Intern".to_string(),
                    organization: Some("Example Data Center".to_string()),
                    duration: Some("2024 - Present".to_string()),
                    description: Some(
                        "Building internal web tools with Angular and Node.js.".to_string(),
                    ),
                },
                Experience {
                    title: "Frontend Developer".to_string(),
                    organization: Some("Freelance".to_string()),
                    duration: Some("2023 - Present".to_string()),
                    description: Some(
                        "Responsive websites and web applications for small clients.".to_string(),
                    ),
                },
            ],
            education: vec![Education {
                degree: "B.Sc. Computer Science".to_string(),
                institution: Some("Example University".to_string()),
                duration: Some("2020 - 2024".to_string()),
                description: Some("Software engineering and web development track.".to_string()),
            }],
            certificates: vec![
                Certificate {
                    name: "Foundations of UX Design".to_string(),
                    issuer: Some("Google".to_string()),
                    date: Some("2024".to_string()),
                    url: Some("https://coursera.org/verify/example-ux".to_string()),
                },
                Certificate {
                    name: "Full Stack Web Development".to_string(),
                    issuer: Some("Route Academy".to_string()),
                    date: Some("2023".to_string()),
                    url: None,
                },
            ],
            languages: vec![
                Language {
                    language: "English".to_string(),
                    level: Some("Upper Intermediate".to_string()),
                    description: Some("Professional working proficiency".to_string()),
                },
                Language {
                    language: "Arabic".to_string(),
                    level: Some("Native".to_string()),
                    description: None,
                },
            ],
        }
    }
}
