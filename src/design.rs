pub struct DesignStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
}

pub const DEFAULT_DESIGN_ID: &str = "minimalistic";

pub const DESIGN_STYLES: &[DesignStyle] = &[
    DesignStyle {
        id: "minimalistic",
        name: "Minimalistic",
        description: "Clean, simple design with lots of whitespace",
        system_prompt: "Create a minimalistic design with clean lines, plenty of whitespace, simple typography, and a neutral color palette. Focus on simplicity and functionality.",
    },
    DesignStyle {
        id: "modern",
        name: "Modern",
        description: "Contemporary design with bold typography",
        system_prompt: "Create a modern design with bold typography, geometric shapes, contemporary color schemes, and sleek interfaces. Use modern CSS features and clean layouts.",
    },
    DesignStyle {
        id: "professional",
        name: "Professional",
        description: "Business-oriented, corporate aesthetic",
        system_prompt: "Create a professional, corporate design suitable for business applications. Use conservative colors, structured layouts, and formal typography.",
    },
    DesignStyle {
        id: "creative",
        name: "Creative",
        description: "Artistic and expressive with vibrant colors",
        system_prompt: "Create a creative, artistic design with vibrant colors, unique layouts, creative typography, and expressive visual elements. Be bold and innovative.",
    },
    DesignStyle {
        id: "dark",
        name: "Dark Theme",
        description: "Dark background with light text",
        system_prompt: "Create a dark theme design with dark backgrounds, light text, and appropriate contrast. Use dark grays, blacks, and accent colors that work well in dark mode.",
    },
    DesignStyle {
        id: "retro",
        name: "Retro",
        description: "Vintage-inspired design elements",
        system_prompt: "Create a retro/vintage design with nostalgic elements, classic typography, muted colors, and design patterns reminiscent of past decades.",
    },
    DesignStyle {
        id: "futuristic",
        name: "Futuristic",
        description: "Sci-fi inspired with neon accents",
        system_prompt: "Create a futuristic design with sci-fi elements, neon colors, high-tech aesthetics, and modern geometric patterns. Think cyberpunk and space-age design.",
    },
    DesignStyle {
        id: "elegant",
        name: "Elegant",
        description: "Sophisticated and refined appearance",
        system_prompt: "Create an elegant, sophisticated design with refined typography, luxurious color palettes, and graceful layouts. Focus on beauty and sophistication.",
    },
    DesignStyle {
        id: "playful",
        name: "Playful",
        description: "Fun and colorful with rounded elements",
        system_prompt: "Create a playful, fun design with bright colors, rounded corners, friendly typography, and whimsical elements. Make it joyful and engaging.",
    },
    DesignStyle {
        id: "material",
        name: "Material Design",
        description: "Google Material Design principles",
        system_prompt: "Create a design following Google Material Design principles with elevation, shadows, bold colors, and consistent spacing. Use material design components and patterns.",
    },
];

pub fn design_style(id: &str) -> Option<&'static DesignStyle> {
    DESIGN_STYLES.iter().find(|style| style.id == id)
}
