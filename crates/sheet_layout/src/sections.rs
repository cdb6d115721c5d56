//! Sheet sections
//!
//! The composer knows how each part of the character sheet is built
//! out of headings, stat boxes, and tables. Sections take a top-left
//! position, draw themselves, and report where they ended so the
//! caller can stack them down the page.

use ship_model::{Bay, Craft, Mount, Ship, ShipStat, ShipSystem, Weapon};

use crate::dice::multiply_dice;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::measure::TextMeasurer;
use crate::sheet::SheetMetrics;
use crate::style::{SheetStyle, StyleRegistry};
use crate::surface::{DrawSurface, TextAlign};
use crate::table::{layout_table, CellFn, TableSpec};

/// Marker the owner pencils over as the ship takes damage.
pub const DAMAGE_BUBBLE: &str = "[_]";

const STAT_COLUMNS: [[ShipStat; 5]; 2] = [
    [
        ShipStat::Hp,
        ShipStat::Shields,
        ShipStat::Reactor,
        ShipStat::Ammo,
        ShipStat::Restores,
    ],
    [
        ShipStat::Evasion,
        ShipStat::Armour,
        ShipStat::Speed,
        ShipStat::Sensors,
        ShipStat::Signature,
    ],
];

/// Builds the sections of one ship's sheet.
pub struct SheetComposer<'a> {
    ship: &'a Ship,
    styles: StyleRegistry,
    metrics: SheetMetrics,
}

impl<'a> SheetComposer<'a> {
    pub fn new(ship: &'a Ship) -> Self {
        Self {
            ship,
            styles: StyleRegistry::new(),
            metrics: SheetMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    /// Draw a section heading and return its bottom-right corner. The
    /// heading spans from `x` to `end_x`, or to the right margin when
    /// no end is given.
    pub fn add_heading<S>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        text: &str,
        align: TextAlign,
        end_x: Option<f32>,
    ) -> Point
    where
        S: DrawSurface + TextMeasurer,
    {
        let style = self.styles.get(SheetStyle::Heading2);
        let end_x = end_x.unwrap_or(surface.page_width() - self.metrics.margin_x);
        let height = surface.measure_text(text, style).height;
        let rect = Rect::new(x, y, end_x - x, height);
        surface.draw_text(text, style, rect, align);
        Point::new(rect.right(), rect.bottom())
    }

    /// Sheet title: the ship's identifier and name in capitals,
    /// centered across the page.
    pub fn add_title<S>(&self, surface: &mut S, x: f32, y: f32) -> Point
    where
        S: DrawSurface + TextMeasurer,
    {
        let title = match self.ship.identifier.as_deref() {
            Some(id) if !id.is_empty() => format!("{}: {}", id, self.ship.name),
            _ => self.ship.name.clone(),
        };
        self.add_heading(surface, x, y, &title.to_uppercase(), TextAlign::Center, None)
    }

    /// Stat grid: two columns of five labelled stat boxes.
    pub fn add_stats<S>(&self, surface: &mut S, x: f32, y: f32) -> Point
    where
        S: DrawSurface + TextMeasurer,
    {
        let end_x = surface.page_width() - self.metrics.margin_x;
        let columns = STAT_COLUMNS.len() as f32;
        let column_width =
            (end_x - x - self.metrics.section_gap * 2.0 * (columns - 1.0)) / columns;
        let probe = surface.measure_text("Test", self.styles.get(SheetStyle::StatBox));
        let box_height = probe.height * 1.5 + 2.0 * self.metrics.cell_pad_y;

        let mut current_x = x;
        let mut current_y = y;
        for column in &STAT_COLUMNS {
            current_y = y;
            for stat in column {
                let area = Rect::new(current_x, current_y, column_width, box_height);
                current_y = self.add_stat_box(surface, area, *stat).y;
            }
            current_x += column_width + 2.0 * self.metrics.section_gap;
        }
        Point::new(x, current_y)
    }

    /// One stat box: the label on the left, a bordered value box three
    /// squares wide against the right edge.
    fn add_stat_box<S>(&self, surface: &mut S, area: Rect, stat: ShipStat) -> Point
    where
        S: DrawSurface,
    {
        let value_width = area.height * 3.0;
        let value_area = Rect::new(area.right() - value_width, area.y, value_width, area.height);
        let label_area = Rect::new(area.x, area.y, area.width - value_width, area.height);

        // gauges show the maximum to count down from, flat stats show
        // the value with room to note a modifier
        let (text, align) = if stat.is_gauge() {
            (format!("/ {}", self.ship.stat(stat)), TextAlign::Far)
        } else {
            (format!("{} (+  )", self.ship.stat(stat)), TextAlign::Center)
        };

        surface.draw_rect(value_area);
        surface.draw_text(
            &text,
            self.styles.get(SheetStyle::StatBox),
            value_area.inflate(-self.metrics.cell_pad_x, 0.0),
            align,
        );
        surface.draw_text(
            stat.label(),
            self.styles.get(SheetStyle::Heading3),
            label_area,
            TextAlign::Near,
        );

        area.bottom_left()
    }

    /// Trait table: names on the left, wrapped descriptions filling
    /// the rest of the page.
    pub fn add_traits<S>(&self, surface: &mut S, x: f32, y: f32) -> Result<Point>
    where
        S: DrawSurface + TextMeasurer,
    {
        let rows: Vec<(&String, &String)> = self.ship.traits.iter().collect();
        let spec = TableSpec {
            columns: vec![
                Box::new(|row: &(&String, &String)| Ok(row.0.clone()))
                    as CellFn<'static, (&String, &String)>,
                Box::new(|row: &(&String, &String)| Ok(row.1.clone())),
            ],
            headers: Some(vec!["NAME".to_string(), "DESCRIPTION".to_string()]),
            body_style: SheetStyle::Mono,
            header_style: SheetStyle::MonoHeading3,
            draw_borders: true,
            wrap_last: true,
        };

        let end_x = surface.page_width() - self.metrics.margin_x;
        layout_table(
            surface,
            &self.styles,
            &self.metrics,
            Point::new(x, y),
            &rows,
            &spec,
            end_x,
        )
    }

    /// Core and slot system tables side by side, each under its own
    /// heading. The slot table is padded with one blank row per free
    /// slot so the owner can write in later additions.
    pub fn add_systems<S>(&self, surface: &mut S, x: f32, y: f32) -> Result<Point>
    where
        S: DrawSurface + TextMeasurer,
    {
        let filler = ShipSystem::filler();
        let core: Vec<&ShipSystem> = self.ship.core_systems().collect();
        let slots = self.slot_rows(&filler);

        let end_x = surface.page_width() - self.metrics.margin_x;
        let gap = 2.0 * self.metrics.section_gap;
        let column_width = (end_x - x - gap) / 2.0;

        let mut heading_bottom = y;
        let mut current_x = x;
        for title in ["SYSTEMS - CORE", "SYSTEMS - SLOTS"] {
            let point = self.add_heading(
                surface,
                current_x,
                y,
                title,
                TextAlign::Near,
                Some(current_x + column_width),
            );
            heading_bottom = point.y;
            current_x += column_width + gap;
        }
        let table_start = heading_bottom + self.metrics.section_gap;

        let mut max_bottom = y;
        let mut current_x = x;
        for rows in [&core, &slots] {
            let bottom = layout_table(
                surface,
                &self.styles,
                &self.metrics,
                Point::new(current_x, table_start),
                rows,
                &Self::system_table_spec(),
                current_x + column_width,
            )?;
            max_bottom = max_bottom.max(bottom.y);
            current_x += column_width + gap;
        }
        Ok(Point::new(x, max_bottom))
    }

    /// The equipped slot systems followed by one filler row per free
    /// slot.
    fn slot_rows<'f>(&'f self, filler: &'f ShipSystem) -> Vec<&'f ShipSystem> {
        let mut rows: Vec<&ShipSystem> = self.ship.slot_systems().collect();
        for _ in 0..self.ship.free_system_slots() {
            rows.push(filler);
        }
        rows
    }

    fn system_table_spec<'r>() -> TableSpec<'static, &'r ShipSystem> {
        TableSpec {
            columns: vec![
                Box::new(|system: &&ShipSystem| Ok(system.name.clone()))
                    as CellFn<'static, &ShipSystem>,
                Box::new(|system: &&ShipSystem| Ok(damage_track(system))),
                Box::new(|system: &&ShipSystem| Ok(system.description.clone())),
            ],
            headers: Some(vec![
                "NAME".to_string(),
                "DMG".to_string(),
                "DESCRIPTION".to_string(),
            ]),
            body_style: SheetStyle::Mono,
            header_style: SheetStyle::MonoHeading3,
            draw_borders: true,
            wrap_last: true,
        }
    }

    /// Mount table: one row per hardpoint, with the weapon's numbers
    /// scaled for multi-barrel mounts.
    pub fn add_mounts<S>(&self, surface: &mut S, x: f32, y: f32) -> Result<Point>
    where
        S: DrawSurface + TextMeasurer,
    {
        let spec = TableSpec {
            columns: vec![
                Box::new(|mount: &Mount| {
                    Ok(match &mount.weapon {
                        Some(weapon) => format!("{} {}", DAMAGE_BUBBLE, weapon.name),
                        None => format!("{} (S{})", DAMAGE_BUBBLE, mount.size),
                    })
                }) as CellFn<'static, Mount>,
                Box::new(|mount: &Mount| Ok(mount.position_code())),
                Box::new(|mount: &Mount| Ok(weapon_cell(mount, |w| w.range.to_string()))),
                Box::new(|mount: &Mount| Ok(weapon_cell(mount, |w| w.ammo_cost.to_string()))),
                Box::new(|mount: &Mount| Ok(weapon_cell(mount, |w| w.power_cost.to_string()))),
                Box::new(|mount: &Mount| match &mount.weapon {
                    Some(weapon) => multiply_dice(&weapon.shots(), mount.count as i64),
                    None => Ok(format!(" (x{})", mount.count)),
                }),
                Box::new(|mount: &Mount| {
                    Ok(weapon_cell(mount, |w| w.armor_penetration.to_string()))
                }),
                Box::new(|mount: &Mount| Ok(weapon_cell(mount, |w| w.damage.clone()))),
                Box::new(|mount: &Mount| {
                    Ok(match &mount.weapon {
                        Some(weapon) => weapon.tags.join(", "),
                        None => " ".to_string(),
                    })
                }),
            ],
            headers: Some(
                ["WEAPON NAME", "POS", "RANGE", "AMMO", "PW", "SHOTS", "AP", "DMG", "TAGS"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
            ),
            body_style: SheetStyle::Mono,
            header_style: SheetStyle::MonoHeading3,
            draw_borders: true,
            wrap_last: true,
        };

        let end_x = surface.page_width() - self.metrics.margin_x;
        layout_table(
            surface,
            &self.styles,
            &self.metrics,
            Point::new(x, y),
            &self.ship.mounts,
            &spec,
            end_x,
        )
    }

    /// Bay table: one row per bay, with the loaded craft's numbers
    /// scaled for multi-craft bays.
    pub fn add_bays<S>(&self, surface: &mut S, x: f32, y: f32) -> Result<Point>
    where
        S: DrawSurface + TextMeasurer,
    {
        let spec = TableSpec {
            columns: vec![
                Box::new(|bay: &Bay| {
                    Ok(match &bay.craft {
                        Some(craft) => format!("{} {}", DAMAGE_BUBBLE, craft.name),
                        None => format!("{} (S{})", DAMAGE_BUBBLE, bay.size),
                    })
                }) as CellFn<'static, Bay>,
                Box::new(|bay: &Bay| Ok(bay.position_code())),
                Box::new(|bay: &Bay| {
                    Ok(craft_cell(bay, |c| c.stat(ShipStat::Speed).to_string()))
                }),
                Box::new(|bay: &Bay| Ok(craft_cell(bay, |c| c.ammo_cost.to_string()))),
                Box::new(|bay: &Bay| Ok(craft_cell(bay, |c| c.power_cost.to_string()))),
                Box::new(|bay: &Bay| match &bay.craft {
                    Some(craft) => multiply_dice(&craft.swarm(), bay.count as i64),
                    None => Ok(format!(" (x{})", bay.count)),
                }),
                Box::new(|bay: &Bay| {
                    Ok(craft_cell(bay, |c| c.armor_penetration.to_string()))
                }),
                Box::new(|bay: &Bay| {
                    Ok(craft_cell(bay, |c| c.damage.clone().unwrap_or_default()))
                }),
                Box::new(|bay: &Bay| {
                    Ok(match &bay.craft {
                        Some(craft) => craft.tags.join(", "),
                        None => " ".to_string(),
                    })
                }),
            ],
            headers: Some(
                ["PAYLOAD NAME", "POS", "SPEED", "AMMO", "PW", "SWARM", "AP", "DMG", "TAGS"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
            ),
            body_style: SheetStyle::Mono,
            header_style: SheetStyle::MonoHeading3,
            draw_borders: true,
            wrap_last: true,
        };

        let end_x = surface.page_width() - self.metrics.margin_x;
        layout_table(
            surface,
            &self.styles,
            &self.metrics,
            Point::new(x, y),
            &self.ship.bays,
            &spec,
            end_x,
        )
    }
}

fn weapon_cell(mount: &Mount, value: impl Fn(&Weapon) -> String) -> String {
    match &mount.weapon {
        Some(weapon) => value(weapon),
        None => String::new(),
    }
}

fn craft_cell(bay: &Bay, value: impl Fn(&Craft) -> String) -> String {
    match &bay.craft {
        Some(craft) => value(craft),
        None => String::new(),
    }
}

/// Damage bubbles for a system row: the system's own bubble text when
/// it has one, otherwise one blank bubble per hit point.
fn damage_track(system: &ShipSystem) -> String {
    match &system.bubble_text {
        Some(texts) => texts
            .iter()
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" "),
        None if system.hit_points > 0 => {
            vec![DAMAGE_BUBBLE; system.hit_points as usize].join(" ")
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{DrawOp, RecordingSurface};
    use ship_model::{MountKind, PositionArc, ShipClass};

    fn test_ship() -> Ship {
        let mut ship = Ship::new("Emblem".to_string(), ShipClass::Frigate);
        ship.identifier = Some("ORN-101".to_string());
        ship.stats.insert(ShipStat::Hp, 6);
        ship.stats.insert(ShipStat::Evasion, 12);
        ship.system_slots = 4;
        ship.traits.insert(
            "Nimble".to_string(),
            "Reduce incoming damage by one when evading.".to_string(),
        );
        ship
    }

    fn autocannon() -> Weapon {
        Weapon {
            name: "Autocannon".to_string(),
            size: 1,
            range: 10,
            damage: "1d6".to_string(),
            ammo_cost: 1,
            power_cost: 0,
            armor_penetration: 1,
            description: String::new(),
            tags: vec!["Shots 1d4".to_string()],
        }
    }

    fn empty_mount(size: u32, count: u32) -> Mount {
        Mount {
            size,
            count,
            kind: MountKind::Turret,
            main_arc: PositionArc::Forward,
            is_spinal: false,
            weapon: None,
        }
    }

    fn core_system(name: &str, hit_points: u32) -> ShipSystem {
        ShipSystem {
            name: name.to_string(),
            description: String::new(),
            slots: 0,
            hit_points,
            bubble_text: None,
            equippable_classes: ShipClass::all().to_vec(),
        }
    }

    #[test]
    fn test_title_combines_identifier_and_name() {
        let mut ship = test_ship();
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_title(&mut surface, 20.0, 20.0);
        assert_eq!(surface.texts(), vec!["ORN-101: EMBLEM"]);

        ship.identifier = None;
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_title(&mut surface, 20.0, 20.0);
        assert_eq!(surface.texts(), vec!["EMBLEM"]);

        ship.identifier = Some(String::new());
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_title(&mut surface, 20.0, 20.0);
        assert_eq!(surface.texts(), vec!["EMBLEM"]);
    }

    #[test]
    fn test_heading_spans_to_the_right_margin() {
        let ship = test_ship();
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();

        let point = composer.add_heading(&mut surface, 20.0, 40.0, "TRAITS", TextAlign::Near, None);

        let height = 14.0 * 1.2;
        assert_eq!(point, Point::new(575.0, 40.0 + height));
        match &surface.ops[0] {
            DrawOp::Text { text, rect, align, .. } => {
                assert_eq!(text, "TRAITS");
                assert_eq!(*rect, Rect::new(20.0, 40.0, 555.0, height));
                assert_eq!(*align, TextAlign::Near);
            }
            other => panic!("expected a text op, got {:?}", other),
        }
    }

    #[test]
    fn test_stat_boxes_stack_without_gaps() {
        let ship = test_ship();
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();

        composer.add_stats(&mut surface, 20.0, 40.0);

        let rects: Vec<Rect> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 10);
        for pair in rects[..5].windows(2) {
            assert_eq!(pair[1].y, pair[0].bottom());
        }
        // the second column restarts at the top
        assert_eq!(rects[5].y, rects[0].y);
        assert!(rects[5].x > rects[0].x);
    }

    #[test]
    fn test_stat_boxes_format_gauges_and_modifiers() {
        let ship = test_ship();
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();

        composer.add_stats(&mut surface, 20.0, 40.0);

        let texts = surface.texts();
        assert!(texts.contains(&"/ 6"));
        assert!(texts.contains(&"12 (+  )"));
        assert!(texts.contains(&"HP"));
        assert!(texts.contains(&"Evasion"));
        // unset stats still render as zero
        assert!(texts.contains(&"/ 0"));
    }

    #[test]
    fn test_trait_descriptions_wrap() {
        let ship = test_ship();
        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();

        composer.add_traits(&mut surface, 20.0, 40.0).unwrap();

        assert!(surface.texts().contains(&"Nimble"));
        let wrapped: Vec<&str> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::WrappedText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(wrapped.contains(&"Reduce incoming damage by one when evading."));
    }

    #[test]
    fn test_slot_table_padded_with_one_row_per_free_slot() {
        let mut ship = test_ship();
        ship.systems.push(core_system("Bridge", 2));
        ship.systems.push(core_system("Engines", 2));
        let mut booster = core_system("Engine Booster", 1);
        booster.slots = 1;
        ship.systems.push(booster);

        let composer = SheetComposer::new(&ship);
        let filler = ShipSystem::filler();
        let rows = composer.slot_rows(&filler);

        // one equipped system and three free slots
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, "Engine Booster");
        assert!(rows[1..].iter().all(|s| s.name.is_empty()));
    }

    #[test]
    fn test_systems_section_draws_both_headings() {
        let mut ship = test_ship();
        ship.systems.push(core_system("Bridge", 2));
        let mut booster = core_system("Engine Booster", 1);
        booster.slots = 1;
        ship.systems.push(booster);

        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_systems(&mut surface, 20.0, 40.0).unwrap();

        let texts = surface.texts();
        assert!(texts.contains(&"SYSTEMS - CORE"));
        assert!(texts.contains(&"SYSTEMS - SLOTS"));
        assert!(texts.contains(&"Bridge"));
        assert!(texts.contains(&"Engine Booster"));
        // Bridge carries two hit point bubbles
        assert!(texts.contains(&"[_] [_]"));
    }

    #[test]
    fn test_mount_rows_scale_shots_and_mark_empty_hardpoints() {
        let mut ship = test_ship();
        ship.mounts.push(empty_mount(2, 1));
        let mut armed = empty_mount(1, 2);
        armed.weapon = Some(autocannon());
        ship.mounts.push(armed);

        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_mounts(&mut surface, 20.0, 40.0).unwrap();

        let texts = surface.texts();
        assert!(texts.contains(&"[_] (S2)"));
        assert!(texts.contains(&" (x1)"));
        assert!(texts.contains(&"[_] Autocannon"));
        // two barrels double the 1d4 shot roll
        assert!(texts.contains(&"2d4"));
        assert!(texts.contains(&"WEAPON NAME"));
    }

    #[test]
    fn test_bay_rows_list_every_launch_arc() {
        let mut ship = test_ship();
        ship.bays.push(Bay {
            size: 1,
            count: 2,
            arcs: vec![
                PositionArc::Forward,
                PositionArc::Port,
                PositionArc::Starboard,
            ],
            craft: None,
        });

        let composer = SheetComposer::new(&ship);
        let mut surface = RecordingSurface::new();
        composer.add_bays(&mut surface, 20.0, 40.0).unwrap();

        let texts = surface.texts();
        assert!(texts.contains(&"FPS"));
        assert!(texts.contains(&"[_] (S1)"));
        assert!(texts.contains(&" (x2)"));
        assert!(texts.contains(&"PAYLOAD NAME"));
    }

    #[test]
    fn test_damage_track_prefers_bubble_text() {
        let mut system = core_system("Bulk Magazine", 4);
        system.bubble_text = Some(vec!["A".to_string(), "A".to_string()]);
        assert_eq!(damage_track(&system), "[A] [A]");

        let plain = core_system("Bridge", 2);
        assert_eq!(damage_track(&plain), "[_] [_]");

        let inert = core_system("Emitter", 0);
        assert_eq!(damage_track(&inert), "");
    }
}
