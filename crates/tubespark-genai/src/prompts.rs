//! Prompt builders, one per generation operation.
//!
//! These are pure string templates; validation and dispatch live in
//! [`crate::client`]. The Shorts script prompt carries a fixed example block
//! whose markers must match the ones `tubespark_models::script` parses.

use tubespark_models::{TrendingTopic, VideoFormat};

/// Fixed example block anchoring the Shorts script output format.
const SHORTS_EXAMPLE: &str = r#"---
**SCENE 1 (0-3s) - THE HOOK**
*   **VISUAL ACTION:** Extreme close-up on a bizarre ingredient. Camera shakes. On-screen text: "NEVER DO THIS!"
*   **NARRATION:** (Energetic voice) "You won't believe what happens when you mix this..."

**SCENE 2 (4-8s) - THE BUILD-UP**
*   **VISUAL ACTION:** Quick cut. Hands mixing the ingredient in a bowl. Smoke rising. *Whoosh* sound effect.
*   **NARRATION:** "...with a quail egg!"

**SCENE 3 (9-12s) - THE CLIMAX**
*   **VISUAL ACTION:** Quick cut. The result is unexpected and stunning. Slow zoom on the result. *Sparkle* sound effect.
*   **NARRATION:** "You open a portal to another dimension!"

**SCENE 4 (13-15s) - THE CTA**
*   **VISUAL ACTION:** Big on-screen text: "WOULD YOU TRY IT?".
*   **NARRATION:** "Comment below if you'd dare!"
---"#;

/// Ideation prompt. References the trend hint's title and summary verbatim
/// when one is supplied so the model conditions on it.
pub fn ideation(topic: &str, format: VideoFormat, trend: Option<&TrendingTopic>) -> String {
    match trend {
        Some(trend) => format!(
            "Generate 5 creative and engaging YouTube video ideas about the topic \"{topic}\", \
             building on the following trend: \"{title} - {summary}\". \
             The ideas must be specifically for the {format} format. \
             For each idea, provide a title and a brief description.",
            topic = topic,
            title = trend.title,
            summary = trend.summary,
            format = format,
        ),
        None => format!(
            "Generate 5 creative and engaging YouTube video ideas about the topic \"{topic}\". \
             The ideas must be specifically for the {format} format. \
             Consider themes that are currently trending and have viral potential within this niche. \
             For each idea, provide a title and a brief description.",
            topic = topic,
            format = format,
        ),
    }
}

/// Trend-discovery prompt. The web-grounding tool is enabled on the request
/// itself; this text only pins down the expected JSON shape.
pub fn trend_discovery(topic: &str) -> String {
    format!(
        r#"Using web search, find the top 5 trending topics or news stories related to the "{topic}" niche.
For each one, provide a short title and a one-sentence summary.
Format your answer as a JSON object containing a single "trends" key, which is an array of objects. Each object must have "title" and "summary" keys.
Example output format:
{{
  "trends": [
    {{
      "title": "Trend title 1",
      "summary": "Trend summary 1."
    }}
  ]
}}
Your answer MUST be only the JSON, with no additional text or formatting such as ```json."#,
    )
}

/// Script prompt for either format. `duration_minutes`, when present, has
/// already been validated as positive by the caller.
pub fn script(
    title: &str,
    description: &str,
    duration_minutes: Option<f64>,
    format: VideoFormat,
) -> String {
    if format.is_shorts() {
        shorts_script(title, description, duration_minutes)
    } else {
        long_form_script(title, description, duration_minutes)
    }
}

fn shorts_script(title: &str, description: &str, duration_minutes: Option<f64>) -> String {
    let duration_text = match duration_minutes {
        Some(minutes) => {
            let seconds = (minutes * 60.0).round() as u64;
            format!(
                "The maximum duration is {seconds} seconds. If the user asks for more than \
                 60 seconds, explain that Shorts are capped at 60 seconds and write a \
                 60-second script."
            )
        }
        None => {
            "The script must be concise and ideal for the short-form format \
             (60 seconds maximum)."
                .to_string()
        }
    };

    format!(
        r#"Write a script for a YouTube Short titled "{title}" with the description "{description}". {duration_text}

**STRICT RULES FOR SHORTS SCRIPTS (FOLLOW WITHOUT EXCEPTION):**

1.  **SCENE-BY-SCENE FORMAT:** The script must be a sequence of short, timed scenes. For EACH scene, describe the VISUAL ACTION and the matching DIALOGUE/NARRATION.
2.  **RELENTLESS PACING:** Pacing is EVERYTHING. Use quick cuts and short, direct sentences. NO FILLER. The video must be understandable even with the sound off.
3.  **IMMEDIATE HOOK (0-3s):** The video MUST start mid-action or with an extremely strong statement or question. No "Hello" or introductions.
4.  **VISUAL BUILD-UP:** Visual actions matter more than the text. Suggest animated on-screen text, zooms, and sound effects (e.g. *whoosh*, *ding*).
5.  **FAST PUNCHLINE/CLIMAX:** The ending must be punchy, satisfying, and straight to the point.
6.  **MINIMAL CTA (last 2s):** A call to action of at most 1-2 seconds.

**OUTPUT FORMATTING EXAMPLE (FOLLOW THIS TEMPLATE):**

{example}

Now write the script for "{title}" following EXACTLY this format and these rules."#,
        title = title,
        description = description,
        duration_text = duration_text,
        example = SHORTS_EXAMPLE,
    )
}

fn long_form_script(title: &str, description: &str, duration_minutes: Option<f64>) -> String {
    let duration_text = match duration_minutes {
        Some(minutes) => format!("The video should run approximately {minutes} minutes. "),
        None => String::new(),
    };

    format!(
        r#"Write a detailed script for a YouTube video titled "{title}" with the description "{description}". {duration_text}
Structure the script with the following well-defined sections:

-   **Introduction (Hook - approx. 30 seconds):** Present the theme, promise the video's value, and build curiosity so the viewer keeps watching.
-   **Development (Main Content):** Split the content into logical topics or sections. For each section, list the main points to cover and give a time estimate. This should be the bulk of the video.
-   **Conclusion (approx. 1 minute):** Recap the main points, reinforce the core message, and include a clear call to action (e.g. 'subscribe', 'watch the next video', 'leave a comment').

**IMPORTANT**: Format the output using Markdown. Use level-2 headings (##) for the main sections (Introduction, Development, Conclusion) and level-3 headings (###) for subsections inside Development. Use asterisk bullets (* ) for the main points."#,
    )
}

/// 5 alternative SEO titles, one per line.
pub fn titles(title: &str, description: &str) -> String {
    format!(
        "Generate 5 alternative, catchy, SEO-optimized titles for a YouTube video with the \
         original title \"{title}\" and the description \"{description}\". \
         List the titles, one per line."
    )
}

/// 3 distinct thumbnail concepts.
pub fn thumbnails(title: &str, description: &str) -> String {
    format!(
        "Describe 3 distinct, striking visual concepts for the thumbnail of a YouTube video \
         titled \"{title}\" with the description \"{description}\". \
         For each concept, describe the visual elements, the text, and the overall style."
    )
}

/// 10 hashtags mixing broad, niche, and format-specific tags.
pub fn hashtags(title: &str, description: &str) -> String {
    format!(
        "Suggest 10 relevant hashtags for a YouTube video titled \"{title}\" with the \
         description \"{description}\". Include a mix of popular broad hashtags, niche \
         hashtags specific to the topic, and, where applicable, hashtags for YouTube Shorts \
         (such as #shorts, #shortsvideo). List the hashtags, one per line, starting with #."
    )
}
