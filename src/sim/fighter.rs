//! Fighter Entity
//!
//! A fighter is an id, a descriptive profile, and two gauges (life, energy).
//! The profile is plain data; the fighter's mutators normalize what goes in.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gauge bounds, shared by life and energy
pub const MAX_LIFE: f32 = 10.0;
pub const MIN_LIFE: f32 = 0.0;
pub const MAX_ENERGY: f32 = 10.0;
pub const MIN_ENERGY: f32 = 0.0;

/// Energy strictly below this means the fighter is tired
pub const TIRED_THRESHOLD: f32 = 5.0;

/// Counter for handing out fighter ids
static FIGHTER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique fighter identifier (never reused within a process)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FighterId(u64);

impl FighterId {
    fn next() -> Self {
        FighterId(FIGHTER_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fighter{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FighterError {
    #[error("style not in styles: {0:?}")]
    UnknownStyle(String),
    #[error("unknown weight class: {0:?}")]
    UnknownWeightClass(String),
}

// =============================================================================
// Enumerations
// =============================================================================

/// Fighting styles a fighter may be assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Striking,
    Wrestling,
    Bjj,
    Boxing,
    MuayThai,
    BoxingBjj,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Striking,
        Style::Wrestling,
        Style::Bjj,
        Style::Boxing,
        Style::MuayThai,
        Style::BoxingBjj,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Style::Striking => "Striking",
            Style::Wrestling => "Wrestling",
            Style::Bjj => "BJJ",
            Style::Boxing => "Boxing",
            Style::MuayThai => "Muay Thai",
            Style::BoxingBjj => "Boxing / BJJ",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = FighterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.label() == s)
            .ok_or_else(|| FighterError::UnknownStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    Lightweight,
    Welterweight,
    Bantamweight,
    Middleweight,
    Featherweight,
    LightHeavyweight,
    Heavyweight,
}

impl WeightClass {
    pub const ALL: [WeightClass; 7] = [
        WeightClass::Lightweight,
        WeightClass::Welterweight,
        WeightClass::Bantamweight,
        WeightClass::Middleweight,
        WeightClass::Featherweight,
        WeightClass::LightHeavyweight,
        WeightClass::Heavyweight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeightClass::Lightweight => "Lightweight",
            WeightClass::Welterweight => "Welterweight",
            WeightClass::Bantamweight => "Bantamweight",
            WeightClass::Middleweight => "Middleweight",
            WeightClass::Featherweight => "Featherweight",
            WeightClass::LightHeavyweight => "Light Heavyweight",
            WeightClass::Heavyweight => "Heavyweight",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightClass {
    type Err = FighterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightClass::ALL
            .iter()
            .copied()
            .find(|class| class.label() == s)
            .ok_or_else(|| FighterError::UnknownWeightClass(s.to_string()))
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Professional record. Every counter is optional (unknown vs. zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub draws: Option<u32>,
    pub knockdowns: Option<u32>,
    pub wins_ko_tko: Option<u32>,
    pub wins_decision: Option<u32>,
    pub wins_submission: Option<u32>,
}

/// Descriptive attributes of a fighter.
///
/// Lengths are in centimetres, weight in kilograms. Strength and dexterity
/// are unitless scores. Anything left as `None` is simply unknown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub reach: Option<f32>,
    pub weight_class: Option<WeightClass>,
    pub strength: Option<f32>,
    pub dexterity: Option<f32>,
    pub style: Option<Style>,
    pub record: Record,
}

// =============================================================================
// Fighter
// =============================================================================

#[derive(Debug, Clone)]
pub struct Fighter {
    id: FighterId,
    profile: FighterProfile,
    life: f32,
    energy: f32,
}

impl Fighter {
    /// Create a fighter with full gauges. Physical stats are normalized.
    pub fn new(profile: FighterProfile) -> Self {
        let mut fighter = Self {
            id: FighterId::next(),
            profile: FighterProfile::default(),
            life: MAX_LIFE,
            energy: MAX_ENERGY,
        };
        fighter.set_profile(profile);
        fighter
    }

    /// Fighter with no known attributes
    pub fn anonymous() -> Self {
        Self::new(FighterProfile::default())
    }

    /// Number of fighter ids issued so far in this process
    pub fn created_count() -> u64 {
        FIGHTER_ID_COUNTER.load(Ordering::SeqCst)
    }

    // === Accessors ===

    pub fn id(&self) -> FighterId {
        self.id
    }

    pub fn profile(&self) -> &FighterProfile {
        &self.profile
    }

    pub fn first_name(&self) -> Option<&str> {
        self.profile.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.profile.last_name.as_deref()
    }

    /// "First Last", skipping whichever part is unknown
    pub fn full_name(&self) -> String {
        match (self.first_name(), self.last_name()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => self.id.to_string(),
        }
    }

    pub fn age(&self) -> Option<u32> {
        self.profile.age
    }

    pub fn height(&self) -> Option<f32> {
        self.profile.height
    }

    pub fn weight(&self) -> Option<f32> {
        self.profile.weight
    }

    pub fn reach(&self) -> Option<f32> {
        self.profile.reach
    }

    pub fn weight_class(&self) -> Option<WeightClass> {
        self.profile.weight_class
    }

    pub fn strength(&self) -> Option<f32> {
        self.profile.strength
    }

    pub fn dexterity(&self) -> Option<f32> {
        self.profile.dexterity
    }

    pub fn style(&self) -> Option<Style> {
        self.profile.style
    }

    pub fn record(&self) -> &Record {
        &self.profile.record
    }

    pub fn wins(&self) -> Option<u32> {
        self.profile.record.wins
    }

    pub fn losses(&self) -> Option<u32> {
        self.profile.record.losses
    }

    pub fn draws(&self) -> Option<u32> {
        self.profile.record.draws
    }

    pub fn knockdowns(&self) -> Option<u32> {
        self.profile.record.knockdowns
    }

    pub fn wins_ko_tko(&self) -> Option<u32> {
        self.profile.record.wins_ko_tko
    }

    pub fn wins_decision(&self) -> Option<u32> {
        self.profile.record.wins_decision
    }

    pub fn wins_submission(&self) -> Option<u32> {
        self.profile.record.wins_submission
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    // === Mutators ===

    /// Replace the whole profile, normalizing physical stats
    pub fn set_profile(&mut self, profile: FighterProfile) {
        let FighterProfile {
            first_name,
            last_name,
            age,
            height,
            weight,
            reach,
            weight_class,
            strength,
            dexterity,
            style,
            record,
        } = profile;

        self.profile.first_name = first_name;
        self.profile.last_name = last_name;
        self.profile.age = age;
        self.profile.height = height.map(f32::abs);
        self.profile.weight = weight.map(f32::abs);
        self.profile.reach = reach.map(f32::abs);
        self.profile.weight_class = weight_class;
        self.profile.strength = strength.map(f32::abs);
        self.profile.dexterity = dexterity.map(f32::abs);
        self.profile.style = style;
        self.profile.record = record;
    }

    pub fn set_first_name(&mut self, name: impl Into<String>) {
        self.profile.first_name = Some(name.into());
    }

    pub fn set_last_name(&mut self, name: impl Into<String>) {
        self.profile.last_name = Some(name.into());
    }

    pub fn set_age(&mut self, age: u32) {
        self.profile.age = Some(age);
    }

    pub fn set_height(&mut self, height: f32) {
        self.profile.height = Some(height.abs());
    }

    pub fn set_weight(&mut self, weight: f32) {
        self.profile.weight = Some(weight.abs());
    }

    pub fn set_reach(&mut self, reach: f32) {
        self.profile.reach = Some(reach.abs());
    }

    pub fn set_weight_class(&mut self, weight_class: WeightClass) {
        self.profile.weight_class = Some(weight_class);
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.profile.strength = Some(strength.abs());
    }

    pub fn set_dexterity(&mut self, dexterity: f32) {
        self.profile.dexterity = Some(dexterity.abs());
    }

    pub fn set_style(&mut self, style: Style) {
        self.profile.style = Some(style);
    }

    /// Set the style from its label. Fails (leaving the style untouched)
    /// if the label isn't one of [`Style::ALL`].
    pub fn set_style_named(&mut self, label: &str) -> Result<(), FighterError> {
        let style = label.parse::<Style>()?;
        self.profile.style = Some(style);
        Ok(())
    }

    pub fn set_record(&mut self, record: Record) {
        self.profile.record = record;
    }

    pub fn set_wins(&mut self, wins: u32) {
        self.profile.record.wins = Some(wins);
    }

    pub fn set_losses(&mut self, losses: u32) {
        self.profile.record.losses = Some(losses);
    }

    pub fn set_draws(&mut self, draws: u32) {
        self.profile.record.draws = Some(draws);
    }

    pub fn set_knockdowns(&mut self, knockdowns: u32) {
        self.profile.record.knockdowns = Some(knockdowns);
    }

    pub fn set_wins_ko_tko(&mut self, wins: u32) {
        self.profile.record.wins_ko_tko = Some(wins);
    }

    pub fn set_wins_decision(&mut self, wins: u32) {
        self.profile.record.wins_decision = Some(wins);
    }

    pub fn set_wins_submission(&mut self, wins: u32) {
        self.profile.record.wins_submission = Some(wins);
    }

    /// Set life, saturating into `[MIN_LIFE, MAX_LIFE]`
    pub fn set_life(&mut self, life: f32) {
        if !life.is_nan() {
            self.life = life.clamp(MIN_LIFE, MAX_LIFE);
        }
    }

    /// Set energy, saturating into `[MIN_ENERGY, MAX_ENERGY]`
    pub fn set_energy(&mut self, energy: f32) {
        if !energy.is_nan() {
            self.energy = energy.clamp(MIN_ENERGY, MAX_ENERGY);
        }
    }

    // === Conditions ===

    pub fn is_tired(&self) -> bool {
        self.energy < TIRED_THRESHOLD
    }

    pub fn is_ko(&self) -> bool {
        self.life == MIN_LIFE
    }
}

/// Fighters are the same fighter iff they share an id
impl PartialEq for Fighter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Fighter {}

fn or_dash<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "< {}:", self.id)?;
        writeln!(f, " -- Full Name: {}", self.full_name())?;
        writeln!(f, " -- Age: {}", or_dash(self.age()))?;
        writeln!(f, " -- Weightclass: {}", or_dash(self.weight_class()))?;
        writeln!(f, " -- Height: {}", or_dash(self.height()))?;
        writeln!(f, " -- Weight: {}", or_dash(self.weight()))?;
        writeln!(f, " -- Reach: {}", or_dash(self.reach()))?;
        writeln!(f, " -- Wins: {}", or_dash(self.wins()))?;
        writeln!(f, " -- Losses: {}", or_dash(self.losses()))?;
        write!(f, " ->")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let a = Fighter::anonymous();
        let b = Fighter::anonymous();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert!(Fighter::created_count() >= 2);
    }

    #[test]
    fn test_clone_keeps_identity() {
        let a = Fighter::anonymous();
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_gauges_start_full() {
        let fighter = Fighter::anonymous();
        assert_eq!(fighter.life(), MAX_LIFE);
        assert_eq!(fighter.energy(), MAX_ENERGY);
        assert!(!fighter.is_tired());
        assert!(!fighter.is_ko());
    }

    #[test]
    fn test_life_and_energy_clamp() {
        let mut fighter = Fighter::anonymous();
        fighter.set_life(42.0);
        assert_eq!(fighter.life(), MAX_LIFE);
        fighter.set_life(-3.0);
        assert_eq!(fighter.life(), MIN_LIFE);
        fighter.set_life(4.5);
        assert_eq!(fighter.life(), 4.5);

        fighter.set_energy(11.0);
        assert_eq!(fighter.energy(), MAX_ENERGY);
        fighter.set_energy(-0.1);
        assert_eq!(fighter.energy(), MIN_ENERGY);
    }

    #[test]
    fn test_nan_gauge_is_ignored() {
        let mut fighter = Fighter::anonymous();
        fighter.set_life(f32::NAN);
        assert_eq!(fighter.life(), MAX_LIFE);
    }

    #[test]
    fn test_is_ko_iff_life_zero() {
        let mut fighter = Fighter::anonymous();
        for life in [10.0, 5.0, 0.5, 0.001] {
            fighter.set_life(life);
            assert!(!fighter.is_ko(), "life {} should not be KO", life);
        }
        fighter.set_life(0.0);
        assert!(fighter.is_ko());
        fighter.set_life(-7.0);
        assert!(fighter.is_ko());
    }

    #[test]
    fn test_is_tired_below_threshold() {
        let mut fighter = Fighter::anonymous();
        fighter.set_energy(TIRED_THRESHOLD);
        assert!(!fighter.is_tired());
        fighter.set_energy(TIRED_THRESHOLD - 0.01);
        assert!(fighter.is_tired());
        fighter.set_energy(0.0);
        assert!(fighter.is_tired());
    }

    #[test]
    fn test_physical_stats_are_absolute() {
        let mut fighter = Fighter::anonymous();
        fighter.set_height(-180.0);
        fighter.set_weight(-77.5);
        fighter.set_reach(-182.0);
        fighter.set_strength(-6.2);
        fighter.set_dexterity(-3.1);
        assert_eq!(fighter.height(), Some(180.0));
        assert_eq!(fighter.weight(), Some(77.5));
        assert_eq!(fighter.reach(), Some(182.0));
        assert_eq!(fighter.strength(), Some(6.2));
        assert_eq!(fighter.dexterity(), Some(3.1));
    }

    #[test]
    fn test_new_normalizes_profile() {
        let fighter = Fighter::new(FighterProfile {
            height: Some(-170.0),
            weight: Some(-70.0),
            ..Default::default()
        });
        assert_eq!(fighter.height(), Some(170.0));
        assert_eq!(fighter.weight(), Some(70.0));
        assert_eq!(fighter.reach(), None);
    }

    #[test]
    fn test_style_accepts_every_known_label() {
        let mut fighter = Fighter::anonymous();
        for style in Style::ALL {
            fighter.set_style_named(style.label()).unwrap();
            assert_eq!(fighter.style(), Some(style));
        }
    }

    #[test]
    fn test_style_rejects_unknown_labels() {
        let mut fighter = Fighter::anonymous();
        fighter.set_style(Style::Boxing);
        for label in ["Karate", "", "boxing", "Muay  Thai", "Sumo"] {
            let err = fighter.set_style_named(label).unwrap_err();
            assert_eq!(err, FighterError::UnknownStyle(label.to_string()));
        }
        assert_eq!(fighter.style(), Some(Style::Boxing));
    }

    #[test]
    fn test_weight_class_from_label() {
        assert_eq!("Light Heavyweight".parse::<WeightClass>(), Ok(WeightClass::LightHeavyweight));
        assert!("Cruiserweight".parse::<WeightClass>().is_err());
    }

    #[test]
    fn test_record_setters() {
        let mut fighter = Fighter::anonymous();
        fighter.set_wins(12);
        fighter.set_losses(3);
        fighter.set_draws(1);
        fighter.set_wins_ko_tko(7);
        assert_eq!(fighter.wins(), Some(12));
        assert_eq!(fighter.losses(), Some(3));
        assert_eq!(fighter.draws(), Some(1));
        assert_eq!(fighter.wins_ko_tko(), Some(7));
        assert_eq!(fighter.wins_submission(), None);
    }

    #[test]
    fn test_full_name() {
        let mut fighter = Fighter::anonymous();
        assert_eq!(fighter.full_name(), fighter.id().to_string());
        fighter.set_first_name("John1");
        assert_eq!(fighter.full_name(), "John1");
        fighter.set_last_name("Cage1");
        assert_eq!(fighter.full_name(), "John1 Cage1");
    }

    #[test]
    fn test_display_lists_attributes() {
        let mut fighter = Fighter::anonymous();
        fighter.set_first_name("Ana");
        fighter.set_last_name("Silva");
        fighter.set_weight_class(WeightClass::Featherweight);
        let text = fighter.to_string();
        assert!(text.contains("Full Name: Ana Silva"));
        assert!(text.contains("Weightclass: Featherweight"));
        assert!(text.contains("Age: -"));
    }
}
