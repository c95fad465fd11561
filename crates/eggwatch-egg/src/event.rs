//! The raid egg event: a gym where a raid is about to hatch.
//!
//! An [`EggEvent`] goes through two phases. [`EggEvent::from_raw`] parses
//! the feed payload into an `EggEvent<Fresh>`; [`EggEvent::enrich`]
//! consumes it once to add cached gym occupancy and yields an
//! `EggEvent<Enriched>`. Either phase can be flattened into the template
//! placeholders with [`EggEvent::flatten`].

use crate::dts::{Dts, DtsValue};
use crate::error::{EggError, Result};
use eggwatch_core::raw::{coerce_float, first_present, int_field, str_field};
use eggwatch_core::{Field, GymCache, Locale, RawEvent, Units, Unknown};
use eggwatch_format::emoji::{ex_eligible_emoji, team_emoji, weather_emoji};
use eggwatch_format::geo::{
    applemaps_link, cardinal_direction, distance_as_str, earth_distance_m, gmaps_link, waze_link,
};
use eggwatch_format::time::{seconds_remaining, time_parts, utc_micros, TimeParts};
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use time::{Duration, OffsetDateTime, UtcOffset};

#[cfg(feature = "telemetry")]
use tracing::{debug, warn};

/// Raid slots every gym offers; guards fill the ones not available.
pub const GYM_RAID_SLOTS: i64 = 6;

/// Kind tag shared by all egg events.
pub const EGG_KIND: &str = "egg";

/// Parsed from the feed, not yet enriched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fresh;

/// Cache enrichment has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enriched;

#[derive(Debug, Clone, PartialEq)]
struct EggData {
    gym_id: Field<String>,
    hatch_time: OffsetDateTime,
    raid_end: OffsetDateTime,
    lat: f64,
    lng: f64,
    /// Metres from the viewer.
    distance: Field<f64>,
    direction: Field<String>,
    weather_id: Field<i64>,
    egg_lvl: i64,
    gym_name: Field<String>,
    gym_description: Field<String>,
    gym_image: Field<String>,
    slots_available: Field<i64>,
    guard_count: Field<i64>,
    sponsor_id: Field<i64>,
    park: Field<String>,
    ex_eligible: Field<i64>,
    is_exclusive: Field<i64>,
    current_team_id: Field<i64>,
    geofence: Field<String>,
    custom_dts: BTreeMap<String, String>,
}

/// One raid egg notification.
#[derive(Debug, Clone, PartialEq)]
pub struct EggEvent<S = Fresh> {
    data: EggData,
    state: PhantomData<S>,
}

impl EggEvent<Fresh> {
    /// Builds an event from a feed payload.
    ///
    /// Only the coordinates and the two event times are required. Every
    /// other field falls back to its sentinel when missing or malformed.
    pub fn from_raw(raw: &RawEvent) -> Result<Self> {
        let parsed = Self::parse(raw);
        #[cfg(feature = "telemetry")]
        if let Err(e) = &parsed {
            warn!(error = %e, "rejected egg event");
        }
        parsed
    }

    /// Parses a single JSON object and builds the event from it.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(raw) => Self::from_raw(&raw),
            _ => Err(EggError::NotAnObject),
        }
    }

    fn parse(raw: &RawEvent) -> Result<Self> {
        let lat = coordinate(raw, "latitude")?;
        let lng = coordinate(raw, "longitude")?;
        // RocketMap sends start/end, Monocle raid_begin/raid_end.
        let hatch_time = epoch_field(raw, "start", "raid_begin")?;
        let raid_end = epoch_field(raw, "end", "raid_end")?;

        let data = EggData {
            gym_id: str_field(raw, &["gym_id"], Unknown::Regular),
            hatch_time,
            raid_end,
            lat,
            lng,
            distance: Field::Unknown(Unknown::Small),
            direction: Field::Unknown(Unknown::Tiny),
            weather_id: int_field(raw, &["weather"], Unknown::Tiny),
            egg_lvl: int_field(raw, &["level"], Unknown::Tiny).unwrap_or(0),
            gym_name: trimmed(str_field(raw, &["name"], Unknown::Regular)),
            gym_description: trimmed(str_field(raw, &["description"], Unknown::Regular)),
            gym_image: trimmed(str_field(raw, &["url"], Unknown::Regular)),
            slots_available: Field::Unknown(Unknown::Tiny),
            guard_count: Field::Unknown(Unknown::Tiny),
            sponsor_id: int_field(raw, &["sponsor"], Unknown::Tiny),
            park: str_field(raw, &["park"], Unknown::Regular),
            ex_eligible: int_field(raw, &["is_ex_raid_eligible"], Unknown::Regular),
            is_exclusive: int_field(raw, &["is_exclusive"], Unknown::Regular),
            current_team_id: int_field(raw, &["team_id", "team"], Unknown::Tiny),
            geofence: Field::Unknown(Unknown::Regular),
            custom_dts: BTreeMap::new(),
        };
        Ok(Self {
            data,
            state: PhantomData,
        })
    }

    /// Adds the cached slot count for this gym and derives the guard count.
    ///
    /// A cache miss, or a slot count outside `0..=GYM_RAID_SLOTS`, leaves
    /// both unknown.
    #[must_use]
    pub fn enrich(self, cache: &impl GymCache) -> EggEvent<Enriched> {
        let mut data = self.data;
        data.slots_available = match &data.gym_id {
            Field::Known(gym_id) => cache.slots_for(gym_id).and_then(|slots| {
                if (0..=GYM_RAID_SLOTS).contains(&slots) {
                    Field::Known(slots)
                } else {
                    Field::Unknown(Unknown::Tiny)
                }
            }),
            Field::Unknown(_) => Field::Unknown(Unknown::Tiny),
        };
        #[cfg(feature = "telemetry")]
        if !data.slots_available.is_known() {
            debug!(gym_id = %data.gym_id, "no cached slots for gym");
        }
        data.guard_count = data
            .slots_available
            .and_then(|slots| {
                Field::from_option(GYM_RAID_SLOTS.checked_sub(slots), Unknown::Tiny)
            });
        EggEvent {
            data,
            state: PhantomData,
        }
    }
}

impl<S> EggEvent<S> {
    /// Places the event relative to a viewer at `origin` (`(lat, lng)`).
    #[must_use]
    pub fn locate_from(mut self, origin: (f64, f64)) -> Self {
        let gym = (self.data.lat, self.data.lng);
        self.data.distance = Field::Known(earth_distance_m(origin, gym));
        self.data.direction = Field::Known(cardinal_direction(origin, gym).to_string());
        self
    }

    /// Tags the event with the name of the geofence it matched.
    #[must_use]
    pub fn with_geofence(mut self, name: impl Into<String>) -> Self {
        self.data.geofence = Field::Known(name.into());
        self
    }

    /// Adds a caller-defined placeholder. Generated placeholders of the same
    /// name take precedence when flattening.
    #[must_use]
    pub fn with_custom_dts(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.custom_dts.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        EGG_KIND
    }

    #[must_use]
    pub fn gym_id(&self) -> &Field<String> {
        &self.data.gym_id
    }

    /// Display name of the event; the gym id.
    #[must_use]
    pub fn name(&self) -> &Field<String> {
        &self.data.gym_id
    }

    #[must_use]
    pub fn hatch_time(&self) -> OffsetDateTime {
        self.data.hatch_time
    }

    #[must_use]
    pub fn raid_end(&self) -> OffsetDateTime {
        self.data.raid_end
    }

    /// Seconds from `now` until the egg hatches (negative once hatched).
    #[must_use]
    pub fn seconds_until_hatch(&self, now: OffsetDateTime) -> i64 {
        seconds_remaining(self.data.hatch_time, now)
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.data.lat
    }

    #[must_use]
    pub fn lng(&self) -> f64 {
        self.data.lng
    }

    /// Metres from the viewer, once [`EggEvent::locate_from`] ran.
    #[must_use]
    pub fn distance(&self) -> Field<f64> {
        self.data.distance
    }

    #[must_use]
    pub fn direction(&self) -> &Field<String> {
        &self.data.direction
    }

    #[must_use]
    pub fn weather_id(&self) -> Field<i64> {
        self.data.weather_id
    }

    #[must_use]
    pub fn egg_lvl(&self) -> i64 {
        self.data.egg_lvl
    }

    #[must_use]
    pub fn gym_name(&self) -> &Field<String> {
        &self.data.gym_name
    }

    #[must_use]
    pub fn gym_description(&self) -> &Field<String> {
        &self.data.gym_description
    }

    #[must_use]
    pub fn gym_image(&self) -> &Field<String> {
        &self.data.gym_image
    }

    #[must_use]
    pub fn slots_available(&self) -> Field<i64> {
        self.data.slots_available
    }

    #[must_use]
    pub fn guard_count(&self) -> Field<i64> {
        self.data.guard_count
    }

    #[must_use]
    pub fn sponsor_id(&self) -> Field<i64> {
        self.data.sponsor_id
    }

    #[must_use]
    pub fn park(&self) -> &Field<String> {
        &self.data.park
    }

    #[must_use]
    pub fn ex_eligible(&self) -> Field<i64> {
        self.data.ex_eligible
    }

    #[must_use]
    pub fn is_exclusive(&self) -> Field<i64> {
        self.data.is_exclusive
    }

    #[must_use]
    pub fn team_id(&self) -> Field<i64> {
        self.data.current_team_id
    }

    #[must_use]
    pub fn geofence(&self) -> &Field<String> {
        &self.data.geofence
    }

    #[must_use]
    pub fn custom_dts(&self) -> &BTreeMap<String, String> {
        &self.data.custom_dts
    }

    /// Flattens the event into template placeholders as of the current time.
    #[must_use]
    pub fn flatten(&self, locale: &impl Locale, offset: UtcOffset, units: Units) -> Dts {
        self.flatten_at(OffsetDateTime::now_utc(), locale, offset, units)
    }

    /// Flattens the event as of `now`.
    ///
    /// Clocks are rendered in `offset`; distances in `units`. Custom
    /// placeholders are applied first and overwritten by generated ones.
    #[must_use]
    pub fn flatten_at(
        &self,
        now: OffsetDateTime,
        locale: &impl Locale,
        offset: UtcOffset,
        units: Units,
    ) -> Dts {
        let d = &self.data;
        let hatch = time_parts(d.hatch_time, offset, now);
        let end = time_parts(d.raid_end, offset, now);
        let weather_name = locale.weather_name(d.weather_id);
        let team = d.current_team_id;

        let mut dts: Dts = d
            .custom_dts
            .iter()
            .map(|(key, value)| (key.clone(), DtsValue::Text(value.clone())))
            .collect();

        let mut put = |key: &str, value: DtsValue| {
            dts.insert(key.to_string(), value);
        };

        put("gym_id", d.gym_id.clone().into());

        put_time_parts(&mut put, &HATCH_KEYS, hatch);
        put("hatch_time_utc", utc_micros(d.hatch_time).into());
        put_time_parts(&mut put, &RAID_END_KEYS, end);
        put("raid_end_utc", d.raid_end.into());
        put("current_timestamp_utc", now.into());

        put("lat", d.lat.into());
        put("lng", d.lng.into());
        put("lat_5", format!("{:.5}", d.lat).into());
        put("lng_5", format!("{:.5}", d.lng).into());
        put(
            "distance",
            d.distance
                .map_or_unknown(Unknown::Small, |m| distance_as_str(m, units))
                .into(),
        );
        put("direction", d.direction.clone().into());
        put("gmaps", gmaps_link(d.lat, d.lng, false).into());
        put("gnav", gmaps_link(d.lat, d.lng, true).into());
        put("applemaps", applemaps_link(d.lat, d.lng, false).into());
        put("applenav", applemaps_link(d.lat, d.lng, true).into());
        put("waze", waze_link(d.lat, d.lng, false).into());
        put("wazenav", waze_link(d.lat, d.lng, true).into());
        put("geofence", d.geofence.clone().into());

        put("weather_id", d.weather_id.into());
        put("weather_or_empty", weather_name.or_empty().into());
        put("weather", weather_name.into());
        put("weather_emoji", weather_emoji(d.weather_id).into());

        put("egg_lvl", d.egg_lvl.into());

        put("gym_name", d.gym_name.clone().into());
        put("gym_description", d.gym_description.clone().into());
        put("gym_image", d.gym_image.clone().into());
        put("slots_available", d.slots_available.into());
        put("guard_count", d.guard_count.into());
        put("sponsor_id", d.sponsor_id.into());
        put("sponsored", is_positive(d.sponsor_id).into());
        put("ex_eligible", is_positive(d.ex_eligible).into());
        put("ex_eligible_emoji", ex_eligible_emoji(d.ex_eligible).into());
        put("is_exclusive", is_positive(d.is_exclusive).into());
        put("park", d.park.clone().into());

        put("team_id", team.into());
        put("team_emoji", team_emoji(team).into());
        put("team_name", locale.team_name(team).into());
        put("team_color", locale.team_color(team).into());
        put("team_leader", locale.leader_name(team).into());

        dts
    }
}

/// Placeholder names for the nine [`TimeParts`] renderings, in field order.
type TimeKeys = [&'static str; 9];

const HATCH_KEYS: TimeKeys = [
    "hatch_time_left",
    "12h_hatch_time",
    "24h_hatch_time",
    "hatch_time_no_secs",
    "12h_hatch_time_no_secs",
    "24h_hatch_time_no_secs",
    "hatch_time_raw_hours",
    "hatch_time_raw_minutes",
    "hatch_time_raw_seconds",
];

const RAID_END_KEYS: TimeKeys = [
    "raid_time_left",
    "12h_raid_end",
    "24h_raid_end",
    "raid_time_no_secs",
    "12h_raid_end_no_secs",
    "24h_raid_end_no_secs",
    "raid_time_raw_hours",
    "raid_time_raw_minutes",
    "raid_time_raw_seconds",
];

fn put_time_parts(put: &mut impl FnMut(&str, DtsValue), keys: &TimeKeys, parts: TimeParts) {
    let values: [DtsValue; 9] = [
        parts.time_left.into(),
        parts.time_12h.into(),
        parts.time_24h.into(),
        parts.time_left_no_secs.into(),
        parts.time_12h_no_secs.into(),
        parts.time_24h_no_secs.into(),
        parts.raw_hours.into(),
        parts.raw_minutes.into(),
        parts.raw_seconds.into(),
    ];
    for (key, value) in keys.iter().copied().zip(values) {
        put(key, value);
    }
}

/// Tri-state flag: `true`/`false` when the code is known, else unknown.
fn is_positive(code: Field<i64>) -> Field<bool> {
    code.map_or_unknown(Unknown::Regular, |v| v > 0)
}

fn trimmed(field: Field<String>) -> Field<String> {
    field.map(|s| s.trim().to_string())
}

fn coordinate(raw: &RawEvent, field: &'static str) -> Result<f64> {
    raw.get(field)
        .and_then(coerce_float)
        .ok_or(EggError::InvalidCoordinate { field })
}

fn epoch_field(
    raw: &RawEvent,
    primary: &'static str,
    fallback: &'static str,
) -> Result<OffsetDateTime> {
    let value = first_present(raw, &[primary, fallback])
        .ok_or(EggError::MissingTimestamp { primary, fallback })?;
    let field = if raw.get(primary).is_some_and(|v| !v.is_null()) {
        primary
    } else {
        fallback
    };
    parse_epoch(value).ok_or_else(|| EggError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

/// Unix seconds (integer, float or numeric text) as a UTC timestamp.
fn parse_epoch(value: &Value) -> Option<OffsetDateTime> {
    let whole = value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()));
    if let Some(secs) = whole {
        return OffsetDateTime::from_unix_timestamp(secs).ok();
    }
    let secs = coerce_float(value)?;
    let whole = secs.floor();
    #[allow(clippy::cast_possible_truncation)]
    let (whole, nanos) = (whole as i64, ((secs - whole) * 1e9).round() as i64);
    OffsetDateTime::from_unix_timestamp(whole)
        .ok()?
        .checked_add(Duration::nanoseconds(nanos))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use eggwatch_format::{LocaleTable, MemoryCache};
    use serde_json::json;

    fn raw(value: Value) -> RawEvent {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    fn minimal() -> RawEvent {
        raw(json!({
            "gym_id": "G1",
            "start": 1_700_000_000,
            "end": 1_700_003_600,
            "latitude": "10.0",
            "longitude": "20.0"
        }))
    }

    #[test]
    fn minimal_payload_defaults_everything_else() {
        let egg = EggEvent::from_raw(&minimal()).expect("minimal egg should parse");

        #[allow(clippy::float_cmp)]
        {
            assert_eq!(egg.lat(), 10.0);
            assert_eq!(egg.lng(), 20.0);
        }
        assert_eq!(egg.egg_lvl(), 0);
        assert_eq!(egg.gym_id(), &Field::Known("G1".to_string()));
        assert_eq!(egg.name(), egg.gym_id());
        assert_eq!(egg.gym_name(), &Field::Unknown(Unknown::Regular));
        assert_eq!(egg.weather_id(), Field::Unknown(Unknown::Tiny));
        assert_eq!(egg.team_id(), Field::Unknown(Unknown::Tiny));
        assert_eq!(egg.ex_eligible(), Field::Unknown(Unknown::Regular));
        assert_eq!(egg.distance(), Field::Unknown(Unknown::Small));
        assert_eq!(egg.direction(), &Field::Unknown(Unknown::Tiny));
        assert_eq!(egg.geofence(), &Field::Unknown(Unknown::Regular));
        assert_eq!(egg.slots_available(), Field::Unknown(Unknown::Tiny));
        assert_eq!(egg.kind(), "egg");
        assert_eq!(egg.hatch_time().unix_timestamp(), 1_700_000_000);
        assert_eq!(egg.raid_end().unix_timestamp(), 1_700_003_600);
    }

    #[test]
    fn missing_or_non_numeric_coordinates_are_rejected() {
        let mut event = minimal();
        event.remove("latitude");
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::InvalidCoordinate { field: "latitude" })
        ));

        let mut event = minimal();
        event.insert("longitude".into(), json!("east"));
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::InvalidCoordinate { field: "longitude" })
        ));
    }

    #[test]
    fn coordinates_are_checked_before_timestamps() {
        let event = raw(json!({ "gym_id": "G1", "longitude": 2 }));
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::InvalidCoordinate { field: "latitude" })
        ));

        let event = raw(json!({ "gym_id": "G1", "latitude": 1, "longitude": "west" }));
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::InvalidCoordinate { field: "longitude" })
        ));
    }

    #[test]
    fn alternative_keys_prefer_the_first_source() {
        let mut event = minimal();
        event.insert("raid_begin".into(), json!(1_600_000_000));
        event.insert("team_id".into(), json!(2));
        event.insert("team".into(), json!(3));
        let egg = EggEvent::from_raw(&event).unwrap();
        assert_eq!(egg.hatch_time().unix_timestamp(), 1_700_000_000);
        assert_eq!(egg.team_id(), Field::Known(2));

        let event = raw(json!({
            "raid_begin": 1_600_000_000,
            "raid_end": 1_600_002_700,
            "team": 3,
            "latitude": 1.5,
            "longitude": 2.5
        }));
        let egg = EggEvent::from_raw(&event).unwrap();
        assert_eq!(egg.hatch_time().unix_timestamp(), 1_600_000_000);
        assert_eq!(egg.raid_end().unix_timestamp(), 1_600_002_700);
        assert_eq!(egg.team_id(), Field::Known(3));
    }

    #[test]
    fn missing_and_malformed_timestamps_are_errors() {
        let mut event = minimal();
        event.remove("end");
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::MissingTimestamp { primary: "end", fallback: "raid_end" })
        ));

        let mut event = minimal();
        event.insert("start".into(), json!("soon"));
        assert!(matches!(
            EggEvent::from_raw(&event),
            Err(EggError::InvalidTimestamp { field: "start", .. })
        ));
    }

    #[test]
    fn fractional_epoch_keeps_microseconds() {
        let mut event = minimal();
        event.insert("start".into(), json!(1_700_000_000.25));
        let egg = EggEvent::from_raw(&event).unwrap();
        let dts = egg.flatten(&LocaleTable::default(), UtcOffset::UTC, Units::Metric);
        assert_eq!(
            dts["hatch_time_utc"].as_text(),
            Some("2023-11-14T22:13:20.250000Z")
        );
    }

    #[test]
    fn gym_strings_are_trimmed_and_wrong_types_default() {
        let mut event = minimal();
        event.insert("name".into(), json!("  Fountain  "));
        event.insert("description".into(), json!({"nested": true}));
        event.insert("level".into(), json!("5"));
        event.insert("sponsor".into(), json!("none"));
        let egg = EggEvent::from_raw(&event).unwrap();

        assert_eq!(egg.gym_name(), &Field::Known("Fountain".to_string()));
        assert_eq!(egg.gym_description(), &Field::Unknown(Unknown::Regular));
        assert_eq!(egg.egg_lvl(), 5);
        assert_eq!(egg.sponsor_id(), Field::Unknown(Unknown::Tiny));
    }

    #[test]
    fn enrichment_derives_guard_count() {
        let mut cache = MemoryCache::new();
        cache.update_slots("G1", 2);

        let egg = EggEvent::from_raw(&minimal()).unwrap().enrich(&cache);
        assert_eq!(egg.slots_available(), Field::Known(2));
        assert_eq!(egg.guard_count(), Field::Known(4));

        let egg = EggEvent::from_raw(&minimal())
            .unwrap()
            .enrich(&MemoryCache::new());
        assert_eq!(egg.slots_available(), Field::Unknown(Unknown::Tiny));
        assert_eq!(egg.guard_count(), Field::Unknown(Unknown::Tiny));
    }

    #[test]
    fn enrichment_ignores_impossible_slot_counts() {
        for slots in [i64::MIN, -1, GYM_RAID_SLOTS + 1, i64::MAX] {
            let mut cache = MemoryCache::new();
            cache.update_slots("G1", slots);

            let egg = EggEvent::from_raw(&minimal()).unwrap().enrich(&cache);
            assert_eq!(egg.slots_available(), Field::Unknown(Unknown::Tiny), "{slots}");
            assert_eq!(egg.guard_count(), Field::Unknown(Unknown::Tiny), "{slots}");
        }

        let mut cache = MemoryCache::new();
        cache.update_slots("G1", GYM_RAID_SLOTS);
        let egg = EggEvent::from_raw(&minimal()).unwrap().enrich(&cache);
        assert_eq!(egg.guard_count(), Field::Known(0));
    }

    #[test]
    fn enrichment_skips_lookup_without_gym_id() {
        let mut event = minimal();
        event.remove("gym_id");
        let mut cache = MemoryCache::new();
        cache.update_slots("unknown", 1);

        let egg = EggEvent::from_raw(&event).unwrap().enrich(&cache);
        assert_eq!(egg.guard_count(), Field::Unknown(Unknown::Tiny));
    }

    #[test]
    fn locate_from_fills_distance_and_direction() {
        let egg = EggEvent::from_raw(&minimal())
            .unwrap()
            .locate_from((9.99, 20.0))
            .with_geofence("Downtown");

        let meters = egg.distance().into_known().unwrap();
        assert!((meters - 1112.0).abs() < 5.0, "got {meters}");
        assert_eq!(egg.direction(), &Field::Known("N".to_string()));
        assert_eq!(egg.geofence(), &Field::Known("Downtown".to_string()));
    }

    #[test]
    fn seconds_until_hatch_counts_down() {
        let egg = EggEvent::from_raw(&minimal()).unwrap();
        let now = OffsetDateTime::from_unix_timestamp(1_699_999_900).unwrap();
        assert_eq!(egg.seconds_until_hatch(now), 100);
    }
}
