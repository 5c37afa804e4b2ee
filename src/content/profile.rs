pub const OWNER_NAME: &str = "PANKAJ KUMAR";
pub const TAGLINE: &str = "Software Developer | Backend Focused";
pub const GREETING: &str = "Hello there";
pub const WELCOME: &str = "Welcome to my portfolio!";
pub const HERO_BLURB: &str = "I'm Pankaj Kumar, a web developer with a strong focus on back-end \
& full-stack development. I build clean, scalable and functional web applications that deliver \
smooth & reliable user experiences.";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/10dPpJ0FoKjzDZzGsHdMVD11bGzMHgQBe/view?usp=sharing";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hi, I'm Pankaj Kumar, a software developer with a strong interest in backend development \
and full-stack engineering. I enjoy building reliable systems, writing clean code, and solving \
technical challenges.",
    "I've worked on real-world projects using JavaScript, Node.js, React, MongoDB, and modern web \
frameworks, focusing on writing structured, maintainable code and solving problems through \
simple, scalable solutions. I'm a quick learner who adapts easily to new technologies and \
environments.",
    "I'm looking for opportunities where I can learn from experienced developers, contribute to \
meaningful projects, and grow as a strong backend-focused software engineer.",
];

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub url: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Phone",
        value: "+91 8824374977",
        url: "tel:+918824374977",
    },
    ContactChannel {
        label: "Email",
        value: "jangidpankaj2004@gmail.com",
        url: "mailto:jangidpankaj2004@gmail.com",
    },
    ContactChannel {
        label: "GitHub",
        value: "github.com/Pankaj-jangidd",
        url: "https://github.com/Pankaj-jangidd",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/pankaj-jangid",
        url: "https://www.linkedin.com/in/pankaj-jangid-006792282/",
    },
];

pub const FOOTER_CREDIT: &str = "\u{a9} 2024 Designed by Pankaj Kumar";

pub const PRIVATE_REPO_NOTICE: &str = "This is an internship project. The source code is \
proprietary and cannot be shared publicly.";

pub const CONTACT_INVITE: &str = "I'm always open to discussing new opportunities, interesting \
projects, or just having a chat about technology and development.";
