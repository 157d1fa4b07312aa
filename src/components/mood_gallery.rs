//! Mood-triggered resource gallery: clicking an orbiting mood chip
//! opens an overlay with three matching resources.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodResource {
    pub title: &'static str,
    pub kind: &'static str,
    pub icon: &'static str,
}

pub const MOODS: [&str; 6] = ["Happy", "Anxious", "Tired", "Angry", "Sad", "Peaceful"];

/// Resources for a mood. Unknown moods fall back to the Anxious set,
/// the most commonly picked entry point.
pub fn resources_for(mood: &str) -> &'static [MoodResource; 3] {
    match mood {
        "Happy" => &[
            MoodResource { title: "Keep the Momentum", kind: "Article", icon: "✍️" },
            MoodResource { title: "High Energy Beats", kind: "Playlist", icon: "🎵" },
            MoodResource { title: "Gratitude Journaling", kind: "Exercise", icon: "📓" },
        ],
        "Tired" => &[
            MoodResource { title: "Power Nap Guide", kind: "Tips", icon: "💤" },
            MoodResource { title: "Digital Detox", kind: "Article", icon: "📱" },
            MoodResource { title: "Soft Instrumental", kind: "Audio", icon: "🎹" },
        ],
        "Angry" => &[
            MoodResource { title: "Box Breathing", kind: "Exercise", icon: "📦" },
            MoodResource { title: "Physical Release", kind: "Tips", icon: "🏃" },
            MoodResource { title: "Calm the Storm", kind: "Playlist", icon: "⛈️" },
        ],
        "Sad" => &[
            MoodResource { title: "Self-Compassion", kind: "Guide", icon: "❤️" },
            MoodResource { title: "Comfort Audio", kind: "Audio", icon: "📻" },
            MoodResource { title: "Small Wins List", kind: "Exercise", icon: "✅" },
        ],
        "Peaceful" => &[
            MoodResource { title: "Mindfulness Walk", kind: "Guide", icon: "🍃" },
            MoodResource { title: "Deep Zen", kind: "Audio", icon: "🏮" },
            MoodResource { title: "Maintain Peace", kind: "Article", icon: "🌊" },
        ],
        _ => &[
            MoodResource { title: "4-7-8 Breathing", kind: "Exercise", icon: "🌬️" },
            MoodResource { title: "Grounding Techniques", kind: "Guide", icon: "🧘" },
            MoodResource { title: "Lo-fi for Calm", kind: "Audio", icon: "🎧" },
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct MoodGalleryProps {
    pub mood: String,
    pub on_close: Callback<()>,
}

#[function_component(MoodGallery)]
pub fn mood_gallery(props: &MoodGalleryProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mood-gallery modal-active" onclick={on_overlay_click}>
            <div class="mood-gallery-content" onclick={swallow}>
                <button class="close-gallery" onclick={on_close_click} aria-label="Close gallery">{"×"}</button>
                <h3 class="gallery-title">{format!("Focus: {}", props.mood)}</h3>
                <div class="gallery-content">
                    {
                        resources_for(&props.mood).iter().map(|resource| html! {
                            <div class="card" style="opacity: 1; transform: none;">
                                <div style="font-size: 2rem;">{resource.icon}</div>
                                <h4 style="margin: 10px 0;">{resource.title}</h4>
                                <span class="badge" style="font-size: 0.6rem;">{resource.kind}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_three_resources() {
        for mood in MOODS {
            assert_eq!(resources_for(mood).len(), 3, "{mood}");
        }
    }

    #[test]
    fn unknown_mood_falls_back_to_anxious() {
        assert_eq!(resources_for("Confused"), resources_for("Anxious"));
    }

    #[test]
    fn moods_are_distinct_sets() {
        assert_ne!(resources_for("Happy"), resources_for("Sad"));
        assert_ne!(resources_for("Tired"), resources_for("Peaceful"));
    }
}
