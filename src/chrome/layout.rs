//! Box layout for chrome elements
//!
//! A `RowLayout` arranges fixed spacings, stretches, fixed-size elements
//! and nested layouts along one axis. Elements are identified by a caller
//! chosen key, and `arrange` returns the rectangle of every element.
//!
//! Layouts are normally built from typed `LayoutItem`s. For declarative
//! use, `from_description` also accepts a JSON array in the
//! `[5, "icon", 10, "label", -1, "close"]` style, where a non-negative
//! integer is a fixed spacing, a negative integer is a stretch and a
//! string names a registered element.

use crate::geometry::{Point, Rect, Size};
use crate::utils::error::{ChromeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gap inserted between two consecutive elements
pub const ITEM_SPACING: i32 = 2;

/// Main axis of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Direction {
    fn main(&self, size: Size) -> i32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    fn cross(&self, size: Size) -> i32 {
        match self {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    fn size(&self, main: i32, cross: i32) -> Size {
        match self {
            Direction::Horizontal => Size::new(main, cross),
            Direction::Vertical => Size::new(cross, main),
        }
    }

    fn point(&self, main: i32, cross: i32) -> Point {
        match self {
            Direction::Horizontal => Point::new(main, cross),
            Direction::Vertical => Point::new(cross, main),
        }
    }
}

/// One entry of a layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem<K> {
    /// Fixed gap along the main axis
    Spacing(u32),
    /// Expanding filler sharing the leftover space
    Stretch,
    /// Fixed-size element
    Element { key: K, size: Size },
    /// Child layout given its preferred main length and the full cross length
    Nested(RowLayout<K>),
}

/// Elements a layout description may refer to by name
pub type ElementTable<'a, K> = [(&'a str, K, Size)];

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout<K> {
    direction: Direction,
    items: Vec<LayoutItem<K>>,
}

impl<K: Copy + PartialEq> RowLayout<K> {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            items: Vec::new(),
        }
    }

    pub fn with_items(direction: Direction, items: impl IntoIterator<Item = LayoutItem<K>>) -> Self {
        Self {
            direction,
            items: items.into_iter().collect(),
        }
    }

    /// Build from a JSON array description, resolving names through `elements`
    pub fn from_description(direction: Direction, description: &Value, elements: &ElementTable<'_, K>) -> Result<Self> {
        let entries = description
            .as_array()
            .ok_or_else(|| invalid_item(description, json_kind(description)))?;

        let items = entries
            .iter()
            .map(|entry| parse_item(entry, elements))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { direction, items })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn items(&self) -> &[LayoutItem<K>] {
        &self.items
    }

    pub fn add_spacing(&mut self, amount: u32) -> &mut Self {
        self.items.push(LayoutItem::Spacing(amount));
        self
    }

    pub fn add_stretch(&mut self) -> &mut Self {
        self.items.push(LayoutItem::Stretch);
        self
    }

    pub fn add_element(&mut self, key: K, size: Size) -> &mut Self {
        self.items.push(LayoutItem::Element { key, size });
        self
    }

    /// Change the size of every element registered under `key`, returning
    /// whether any was found
    pub fn set_element_size(&mut self, key: K, new_size: Size) -> bool {
        let mut found = false;
        for item in &mut self.items {
            match item {
                LayoutItem::Element { key: k, size } if *k == key => {
                    *size = new_size;
                    found = true;
                }
                LayoutItem::Nested(child) => found |= child.set_element_size(key, new_size),
                _ => {}
            }
        }
        found
    }

    /// Size with every stretch collapsed to zero
    pub fn preferred_size(&self) -> Size {
        let mut main = 0;
        let mut cross = 0;
        let mut elements = 0;

        for item in &self.items {
            match item {
                LayoutItem::Spacing(amount) => main += *amount as i32,
                LayoutItem::Stretch => {}
                LayoutItem::Element { size, .. } => {
                    main += self.direction.main(*size);
                    cross = cross.max(self.direction.cross(*size));
                    elements += 1;
                }
                LayoutItem::Nested(child) => {
                    let size = child.preferred_size();
                    main += self.direction.main(size);
                    cross = cross.max(self.direction.cross(size));
                    elements += 1;
                }
            }
        }

        if elements > 1 {
            main += ITEM_SPACING * (elements - 1);
        }
        self.direction.size(main, cross)
    }

    /// Smallest main-axis length that fits every fixed item
    pub fn minimum_length(&self) -> i32 {
        self.direction.main(self.preferred_size())
    }

    /// Place every element inside `rect`
    pub fn arrange(&self, rect: Rect) -> Vec<(K, Rect)> {
        let mut placed = Vec::new();
        self.arrange_into(rect, &mut placed);
        placed
    }

    fn arrange_into(&self, rect: Rect, placed: &mut Vec<(K, Rect)>) {
        let dir = self.direction;
        let main_start = dir.main(Size::new(rect.x(), rect.y()));
        let cross_start = dir.cross(Size::new(rect.x(), rect.y()));
        let main_len = dir.main(rect.size);
        let cross_len = dir.cross(rect.size);

        let stretches = self
            .items
            .iter()
            .filter(|item| matches!(item, LayoutItem::Stretch))
            .count() as i32;
        let leftover = (main_len - self.minimum_length()).max(0);
        let (share, mut remainder) = if stretches > 0 {
            (leftover / stretches, leftover % stretches)
        } else {
            (0, 0)
        };

        let mut pos = main_start;
        let mut first_element = true;

        for item in &self.items {
            match item {
                LayoutItem::Spacing(amount) => pos += *amount as i32,
                LayoutItem::Stretch => {
                    pos += share;
                    if remainder > 0 {
                        pos += 1;
                        remainder -= 1;
                    }
                }
                LayoutItem::Element { key, size } => {
                    if !first_element {
                        pos += ITEM_SPACING;
                    }
                    first_element = false;

                    let item_main = dir.main(*size);
                    let item_cross = dir.cross(*size);
                    let offset = (cross_len - item_cross) / 2;
                    placed.push((
                        *key,
                        Rect::from_parts(dir.point(pos, cross_start + offset), *size),
                    ));
                    pos += item_main;
                }
                LayoutItem::Nested(child) => {
                    if !first_element {
                        pos += ITEM_SPACING;
                    }
                    first_element = false;

                    let item_main = dir.main(child.preferred_size());
                    let child_rect = Rect::from_parts(
                        dir.point(pos, cross_start),
                        dir.size(item_main, cross_len),
                    );
                    child.arrange_into(child_rect, placed);
                    pos += item_main;
                }
            }
        }
    }
}

fn parse_item<K: Copy + PartialEq>(value: &Value, elements: &ElementTable<'_, K>) -> Result<LayoutItem<K>> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(amount) if amount < 0 => Ok(LayoutItem::Stretch),
            Some(amount) => u32::try_from(amount)
                .map(LayoutItem::Spacing)
                .map_err(|_| invalid_item(value, "out-of-range integer")),
            None if number.is_u64() => Err(invalid_item(value, "out-of-range integer")),
            None => Err(invalid_item(value, "float")),
        },
        Value::String(name) => elements
            .iter()
            .find(|(registered, _, _)| registered == name)
            .map(|(_, key, size)| LayoutItem::Element { key: *key, size: *size })
            .ok_or_else(|| invalid_item(value, "unknown element")),
        Value::Object(map) => {
            let (Some(direction), Some(items)) = (map.get("direction"), map.get("items")) else {
                return Err(invalid_item(value, "object"));
            };
            let direction: Direction = serde_json::from_value(direction.clone())
                .map_err(|_| invalid_item(value, "object"))?;
            Ok(LayoutItem::Nested(RowLayout::from_description(direction, items, elements)?))
        }
        other => Err(invalid_item(other, json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_item(value: &Value, kind: &'static str) -> ChromeError {
    ChromeError::InvalidLayoutItem {
        item: value.to_string(),
        kind,
    }
}
