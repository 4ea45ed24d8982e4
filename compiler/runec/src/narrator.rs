//! Narration of interpreter events.
//!
//! Two styles: mystical (banners, descriptions of realms, operations and
//! targets) and plain (only `SPEAK` output, as `[target] name: value`).
//! Both are [`PresentationSink`]s; the interpreter does not know which one
//! it is talking to.

use rune_eval::{BindingStatus, Event, PresentationSink};
use rune_ir::{Operation, Realm};

use crate::output::SharedOutput;

const BANNER: &str = "============================================================";

/// Narration style.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Mystical,
    Plain,
}

/// Sink that narrates events to an [`Output`](crate::output::Output).
pub struct Narrator {
    style: Style,
    out: SharedOutput,
}

impl Narrator {
    pub fn new(style: Style, out: SharedOutput) -> Self {
        Narrator { style, out }
    }

    pub fn mystical(out: SharedOutput) -> Self {
        Self::new(Style::Mystical, out)
    }

    pub fn plain(out: SharedOutput) -> Self {
        Self::new(Style::Plain, out)
    }

    pub fn style(&self) -> Style {
        self.style
    }

    fn banner(&self, lines: &[&str]) {
        self.out.println("");
        self.out.println(BANNER);
        for line in lines {
            self.out.println(line);
        }
        self.out.println(BANNER);
        self.out.println("");
    }

    fn narrate(&self, event: Event) {
        match event {
            Event::Started => self.banner(&[
                "THE MYSTICAL RITUAL BEGINS",
                "The ancient powers stir... Reality bends to your will...",
            ]),
            Event::Succeeded => self.banner(&[
                "THE RITUAL IS COMPLETE",
                "The spell has been cast successfully!",
                "The spirits return to their realms, their task fulfilled.",
            ]),
            Event::Failed(message) => self.banner(&[
                "THE RITUAL HAS FAILED!",
                &format!("The mystical forces rebel: {message}"),
                "The spell dissipates into the ether...",
            ]),
            Event::Summoned { name, realm, .. } => {
                self.out
                    .println(&format!("The spirit '{name}' materializes from the {realm} realm!"));
            }
            Event::Channeled { name } => {
                self.out
                    .println(&format!("Channeling the mystical essence of '{name}'..."));
            }
            Event::Woven { name } => {
                self.out.println(&format!(
                    "Weaving the cosmic force of '{name}' into the spell matrix..."
                ));
            }
            Event::Manifested {
                operation,
                result,
                value,
            } => {
                self.out.println(&format!(
                    "The essences are {}!",
                    operation_description(operation)
                ));
                self.out
                    .println(&format!("The result manifests as '{result}': {value}"));
            }
            Event::Spoke {
                name,
                value,
                target,
            } => {
                self.out.println("");
                self.out
                    .println(&format!("Speaking to {}:", target_description(&target)));
                self.out
                    .println(&format!("   {name} reveals its essence: {value}"));
            }
        }
    }
}

impl PresentationSink for Narrator {
    fn notify(&self, event: Event) {
        match (self.style, event) {
            (Style::Mystical, event) => self.narrate(event),
            (
                Style::Plain,
                Event::Spoke {
                    name,
                    value,
                    target,
                },
            ) => self.out.println(&format!("[{target}] {name}: {value}")),
            (Style::Plain, _) => {}
        }
    }

    fn invocation_prompt(&self, name: &str, realm: Realm) -> String {
        match self.style {
            Style::Mystical => format!(
                "\nTo summon the spirit '{name}' from {},\n   speak its essence into being: ",
                realm_description(realm)
            ),
            Style::Plain => format!("Enter value for {name} ({realm} realm): "),
        }
    }
}

pub fn realm_description(realm: Realm) -> &'static str {
    match realm {
        Realm::Mortal => "numbers and symbols of the earthly plane",
        Realm::Spirit => "ethereal essences that flow between dimensions",
        Realm::Shadow => "truths and falsehoods from the realm of duality",
        Realm::Void => "emptiness and the absence of being",
        Realm::Astral => "collections that drift through cosmic winds",
        Realm::Divine => "sacred structures blessed by higher powers",
        Realm::Temporal => "moments captured in the flow of time",
    }
}

pub fn operation_description(operation: Operation) -> &'static str {
    match operation {
        Operation::Combine => "united in harmonious addition",
        Operation::Separate => "separated by mystical subtraction",
        Operation::Merge => "fused through multiplicative magic",
        Operation::Split => "divided by the ancient arts",
        Operation::Raise => "raised to transcendent heights",
        Operation::Identity => "distilled to its purest form",
    }
}

/// Known targets get a description; anything else is echoed as written.
pub fn target_description(target: &str) -> &str {
    match target {
        "the void" => "the infinite void that echoes through eternity",
        "the mortal eyes" => "those who walk the earthly plane",
        "the sacred scroll" => "the ancient parchments of knowledge",
        other => other,
    }
}

/// Realm status report: one line per binding, in creation order.
pub fn render_status(status: &[BindingStatus]) -> String {
    if status.is_empty() {
        return "The spirit realm is empty. No spirits have been summoned.".to_string();
    }
    let mut lines = vec!["=== SPIRIT REALM STATUS ===".to_string()];
    lines.extend(status.iter().map(|b| {
        format!(
            "  {}: {} ({} from {} realm)",
            b.name, b.value, b.type_label, b.realm
        )
    }));
    lines.join("\n")
}
