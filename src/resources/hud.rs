//! On-screen HUD built from a small widget tree.
//!
//! [`Widget`] is a closed set of variants: a [`Widget::Container`] holding
//! children, a text [`Widget::Label`] and a clickable [`Widget::Button`].
//! Drawing visits leaves in pre-order, so later children end up on top.
//! Clicks walk the same tree in reverse pre-order and stop at the first
//! widget that handles them, so the topmost widget wins.
//!
//! The [`Hud`] resource owns the root container and refreshes its labels
//! from [`GameState`] once per rendered frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::gamestate::GameState;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Quit,
}

/// Labels the HUD keeps up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelId {
    DeathCounter,
    Score,
    DeathNotice,
    Victory,
}

#[derive(Debug, Clone)]
pub enum Widget {
    Container {
        bounds: Rectangle,
        children: Vec<Widget>,
    },
    Label {
        id: Option<LabelId>,
        bounds: Rectangle,
        text: String,
    },
    Button {
        bounds: Rectangle,
        text: String,
        action: HudAction,
    },
}

impl Widget {
    pub fn container(bounds: Rectangle) -> Self {
        Widget::Container {
            bounds,
            children: Vec::new(),
        }
    }

    pub fn label(id: Option<LabelId>, bounds: Rectangle, text: impl Into<String>) -> Self {
        Widget::Label {
            id,
            bounds,
            text: text.into(),
        }
    }

    pub fn button(bounds: Rectangle, text: impl Into<String>, action: HudAction) -> Self {
        Widget::Button {
            bounds,
            text: text.into(),
            action,
        }
    }

    /// Append a child. Returns `false` if this widget is not a container.
    pub fn add_child(&mut self, child: Widget) -> bool {
        match self {
            Widget::Container { children, .. } => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Visit drawable leaves in pre-order.
    pub fn draw(&self, painter: &mut impl FnMut(&Widget)) {
        match self {
            Widget::Container { children, .. } => {
                for child in children {
                    child.draw(painter);
                }
            }
            Widget::Label { .. } | Widget::Button { .. } => painter(self),
        }
    }

    /// Dispatch a click in reverse pre-order; the first handler wins.
    pub fn handle_click(&self, point: Vector2) -> Option<HudAction> {
        match self {
            Widget::Container { children, .. } => children
                .iter()
                .rev()
                .find_map(|child| child.handle_click(point)),
            Widget::Label { .. } => None,
            Widget::Button { bounds, action, .. } => {
                if bounds.check_collision_point_rec(point) {
                    Some(*action)
                } else {
                    None
                }
            }
        }
    }

    /// Find a label anywhere below this widget.
    pub fn find_label_mut(&mut self, label: LabelId) -> Option<&mut String> {
        match self {
            Widget::Container { children, .. } => children
                .iter_mut()
                .find_map(|child| child.find_label_mut(label)),
            Widget::Label { id: Some(id), text, .. } if *id == label => Some(text),
            _ => None,
        }
    }

    pub fn has_label(&self, label: LabelId) -> bool {
        match self {
            Widget::Container { children, .. } => children.iter().any(|c| c.has_label(label)),
            Widget::Label { id, .. } => *id == Some(label),
            Widget::Button { .. } => false,
        }
    }
}

/// The HUD root and its layout.
#[derive(Resource, Debug, Clone)]
pub struct Hud {
    pub root: Widget,
}

const DEATH_NOTICE_TEXT: &str = "You died! Try again!";
const VICTORY_TEXT: &str = "Yippee! Siopao made it to the steamer basket!";

fn death_counter_text(deaths: u32) -> String {
    format!("Death Counter: {}", deaths)
}

fn score_text(score: i32) -> String {
    format!("Score: {}", score)
}

impl Hud {
    /// Build the default HUD for a window `window_width` pixels wide.
    pub fn new(window_width: f32) -> Self {
        let mut root = Widget::container(Rectangle::new(10.0, 10.0, 600.0, 500.0));
        root.add_child(Widget::label(
            Some(LabelId::DeathCounter),
            Rectangle::new(10.0, 10.0, 80.0, 40.0),
            death_counter_text(0),
        ));
        root.add_child(Widget::label(
            Some(LabelId::Score),
            Rectangle::new(150.0, 10.0, 80.0, 40.0),
            score_text(crate::resources::gamestate::NOT_SCORING),
        ));
        root.add_child(Widget::button(
            Rectangle::new(window_width - 70.0, 10.0, 60.0, 20.0),
            "Quit",
            HudAction::Quit,
        ));
        Self { root }
    }

    /// Refresh label texts from the game state and show the death/victory
    /// notices once they apply.
    pub fn sync(&mut self, state: &GameState) {
        if let Some(text) = self.root.find_label_mut(LabelId::DeathCounter) {
            *text = death_counter_text(state.deaths());
        }
        if let Some(text) = self.root.find_label_mut(LabelId::Score) {
            *text = score_text(state.score());
        }
        if state.deaths() > 0 && !self.root.has_label(LabelId::DeathNotice) {
            self.root.add_child(Widget::label(
                Some(LabelId::DeathNotice),
                Rectangle::new(10.0, 25.0, 80.0, 40.0),
                DEATH_NOTICE_TEXT,
            ));
        }
        if state.victory() && !self.root.has_label(LabelId::Victory) {
            self.root.add_child(Widget::label(
                Some(LabelId::Victory),
                Rectangle::new(10.0, 100.0, 80.0, 40.0),
                VICTORY_TEXT,
            ));
        }
    }

    pub fn handle_click(&self, point: Vector2) -> Option<HudAction> {
        self.root.handle_click(point)
    }
}
