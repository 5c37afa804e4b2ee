use eframe::egui::Color32;

pub struct Skill {
    pub name: &'static str,
    pub color: Color32,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, r: u8, g: u8, b: u8) -> Skill {
    Skill {
        name,
        color: Color32::from_rgb(r, g, b),
    }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "FRONTEND",
        skills: &[
            skill("HTML", 0xE3, 0x4F, 0x26),
            skill("CSS", 0x15, 0x72, 0xB6),
            skill("JavaScript", 0xF7, 0xDF, 0x1E),
            skill("TypeScript", 0x31, 0x78, 0xC6),
            skill("React", 0x61, 0xDA, 0xFB),
            skill("Next.js", 0xFF, 0xFF, 0xFF),
            skill("Tailwind CSS", 0x06, 0xB6, 0xD4),
            skill("Framer Motion", 0xFF, 0x00, 0x80),
        ],
    },
    SkillCategory {
        name: "BACKEND",
        skills: &[
            skill("Node.js", 0x33, 0x99, 0x33),
            skill("Express.js", 0xFF, 0xFF, 0xFF),
            skill("Python", 0x37, 0x76, 0xAB),
            skill("RESTful APIs", 0x06, 0xB6, 0xD4),
            skill("Auth", 0x10, 0xB9, 0x81),
            skill("Prisma ORM", 0x5A, 0x67, 0xD8),
        ],
    },
    SkillCategory {
        name: "DATABASE",
        skills: &[
            skill("SQL", 0xF2, 0x91, 0x11),
            skill("PostgreSQL", 0x41, 0x69, 0xE1),
            skill("MongoDB", 0x47, 0xA2, 0x48),
        ],
    },
    SkillCategory {
        name: "TOOLS",
        skills: &[
            skill("Git", 0xF0, 0x50, 0x32),
            skill("GitHub", 0xFF, 0xFF, 0xFF),
            skill("Postman", 0xFF, 0x6C, 0x37),
            skill("Figma", 0xF2, 0x4E, 0x1E),
            skill("Docker", 0x24, 0x96, 0xED),
            skill("Supabase", 0x3E, 0xCF, 0x8E),
        ],
    },
];
