/// Keyword group paired with the captions it unlocks.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
    pub captions: &'static [&'static str],
}

/// Match priority is table order.
pub static PATTERN_GROUPS: [PatternGroup; 6] = [
    PatternGroup {
        name: "people",
        patterns: &["person", "people", "human", "face"],
        captions: &[
            "A person standing confidently with a warm smile, captured in natural lighting with a softly blurred background.",
            "Portrait of an individual with expressive eyes and genuine expression, photographed with professional composition.",
            "A group of people gathered together in a candid moment, showing natural interaction and positive energy.",
            "Close-up portrait featuring detailed facial features with excellent lighting and shallow depth of field.",
        ],
    },
    PatternGroup {
        name: "architecture",
        patterns: &["building", "architecture", "city", "urban"],
        captions: &[
            "Modern architectural structure with clean geometric lines and contemporary design elements against a clear sky.",
            "Urban cityscape featuring tall buildings with interesting play of light and shadow creating dramatic silhouettes.",
            "Detailed architectural photography showcasing intricate design patterns and structural elements with precise composition.",
            "Contemporary building facade with glass and steel construction reflecting the surrounding environment.",
        ],
    },
    PatternGroup {
        name: "nature",
        patterns: &["nature", "landscape", "tree", "mountain", "water", "sky"],
        captions: &[
            "Breathtaking natural landscape with rolling hills and dramatic sky creating a serene and peaceful atmosphere.",
            "Majestic mountain vista with layered peaks extending into the distance under expansive cloudy skies.",
            "Tranquil water scene reflecting the surrounding landscape with perfect mirror-like clarity and natural beauty.",
            "Lush forest environment with dense vegetation and dappled sunlight filtering through the canopy above.",
        ],
    },
    PatternGroup {
        name: "food",
        patterns: &["food", "meal", "restaurant", "kitchen"],
        captions: &[
            "Artfully plated gourmet dish with vibrant colors and elegant presentation on pristine white dinnerware.",
            "Delicious culinary creation featuring fresh ingredients arranged with professional chef-level attention to detail.",
            "Appetizing meal showcasing rich textures and appealing colors that highlight the quality of ingredients used.",
            "Restaurant-quality food photography with perfect lighting emphasizing the dish's visual appeal and craftsmanship.",
        ],
    },
    PatternGroup {
        name: "animal",
        patterns: &["animal", "pet", "dog", "cat", "wildlife"],
        captions: &[
            "Adorable animal captured in a natural pose with expressive eyes and detailed fur texture in soft lighting.",
            "Wildlife photography featuring a beautiful creature in its natural habitat with excellent composition and timing.",
            "Domestic pet displaying personality and charm through body language and facial expression in comfortable setting.",
            "Animal portrait with sharp focus on distinctive features while maintaining a pleasing background blur.",
        ],
    },
    PatternGroup {
        name: "vehicle",
        patterns: &["vehicle", "car", "transport", "street"],
        captions: &[
            "Sleek vehicle design showcased with dynamic angles highlighting modern engineering and aesthetic appeal.",
            "Transportation scene captured with motion and energy, demonstrating the relationship between vehicle and environment.",
            "Automotive photography featuring clean lines and reflective surfaces under optimal lighting conditions.",
            "Street scene with vehicles integrated into urban environment showing daily life and movement.",
        ],
    },
];

pub static FALLBACK_CAPTIONS: [&str; 5] = [
    "A well-composed photograph with excellent lighting and clear visual elements that create an engaging and appealing image.",
    "High-quality image featuring interesting visual elements with good composition and professional photographic technique.",
    "Detailed photograph showcasing rich textures and colors with careful attention to lighting and visual balance.",
    "Artistic composition with strong visual impact featuring clear subject matter and skillful use of depth and perspective.",
    "Professional-quality image with excellent clarity and composition that effectively captures the essence of the subject matter.",
];

impl PatternGroup {
    /// True when any keyword occurs, case-insensitively, inside any tag.
    pub fn matches<S: AsRef<str>>(&self, features: &[S]) -> bool {
        features.iter().any(|feature| {
            let feature = feature.as_ref().to_lowercase();
            self.patterns
                .iter()
                .any(|pattern| feature.contains(&pattern.to_lowercase()))
        })
    }
}
