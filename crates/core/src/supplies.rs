use crate::knowledge::KnowledgeBase;
use crate::models::{SupplyRecommendation, Urgency};

/// Supplies for the emergency. The category hint is tried first, then the
/// resolved guidance text; if neither matches, the default kit applies.
///
/// `guidance_text` should be the bare guidance, without a personalization
/// prefix.
pub fn supply_recommendations(
    category_hint: &str,
    guidance_text: Option<&str>,
) -> Vec<SupplyRecommendation> {
    supplies_from(KnowledgeBase::standard(), category_hint, guidance_text)
}

pub fn supplies_from(
    knowledge: &KnowledgeBase,
    category_hint: &str,
    guidance_text: Option<&str>,
) -> Vec<SupplyRecommendation> {
    let items = knowledge
        .supplies
        .find_exact(category_hint)
        .or_else(|| guidance_text.and_then(|text| knowledge.guidance_supplies.find_exact(text)))
        .map(|found| *found.payload)
        .unwrap_or(*knowledge.supplies.default_payload());

    items.to_vec()
}

/// The first `limit` items. Lists are authored most-urgent first.
pub fn top_supplies(items: &[SupplyRecommendation], limit: usize) -> Vec<SupplyRecommendation> {
    items.iter().take(limit).copied().collect()
}

pub fn at_least(items: &[SupplyRecommendation], minimum: Urgency) -> Vec<SupplyRecommendation> {
    items
        .iter()
        .filter(|item| item.urgency >= minimum)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_aid_kit_and_pain_relief() {
        let items = supply_recommendations("nothing recognizable", None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "General first aid kit");
        assert_eq!(items[1].name, "Pain relief tablets");
    }

    #[test]
    fn critical_items_come_first() {
        let items = supply_recommendations("heavy bleeding from the leg", None);
        assert_eq!(items[0].name, "Tourniquet");
        assert_eq!(items[0].urgency, Urgency::Critical);
        assert!(items.windows(2).all(|pair| pair[0].urgency >= pair[1].urgency));
    }

    #[test]
    fn guidance_text_is_used_when_hint_is_vague() {
        let guidance = crate::resolve_guidance("hand got scalded by the kettle", None);
        let items = supply_recommendations("help", Some(guidance.as_str()));
        assert_eq!(items[0].name, "Burn dressing");
    }

    #[test]
    fn every_guidance_text_gets_supplies_for_its_own_family() {
        use crate::knowledge_data::*;

        let first_item = |guidance: &str| supply_recommendations("", Some(guidance))[0].name;
        let expected: &[(&str, &str)] = &[
            (GENERIC_GUIDANCE, "General first aid kit"),
            (CHOKING, "Anti-choking suction device"),
            (CARDIAC_ARREST, "AED (automated external defibrillator)"),
            (HEART_ATTACK, "AED (automated external defibrillator)"),
            (STROKE, "General first aid kit"),
            (SEVERE_BLEEDING, "Tourniquet"),
            (HEAD_INJURY, "General first aid kit"),
            (UNCONSCIOUS, "General first aid kit"),
            (SEIZURE, "General first aid kit"),
            (HEAT_STROKE, "Oral rehydration salts"),
            (HEAT_EXHAUSTION, "Oral rehydration salts"),
            (ANAPHYLAXIS, "Epinephrine auto-injector"),
            (ALLERGIC_REACTION, "Epinephrine auto-injector"),
            (ASTHMA, "Spacer for inhaler"),
            (FOOD_POISONING, "Oral rehydration salts"),
            (CHEMICAL_BURN, "Sterile eye wash"),
            (POISONING, "Poison control magnet"),
            (ELECTRIC_SHOCK, "Burn dressing"),
            (DROWNING, "AED (automated external defibrillator)"),
            (HYPOTHERMIA, "Emergency thermal blanket"),
            (FROSTBITE, "Emergency thermal blanket"),
            (FRACTURE, "SAM splint"),
            (SPRAIN, "SAM splint"),
            (NOSEBLEED, "Sterile gauze pads"),
            (MINOR_WOUND, "Sterile gauze pads"),
            (BURN, "Burn dressing"),
            (SUNBURN, "Burn dressing"),
            (SNAKE_BITE, "General first aid kit"),
            (INSECT_STING, "Epinephrine auto-injector"),
            (ANIMAL_BITE, "Sterile gauze pads"),
            (EYE_INJURY, "Sterile eye wash"),
            (LOW_BLOOD_SUGAR, "Glucose tablets"),
            (PANIC_ATTACK, "General first aid kit"),
            (FEVER, "Digital thermometer"),
            (CHILDBIRTH, "General first aid kit"),
            (DENTAL_INJURY, "Sterile gauze pads"),
            (SHOCK, "Emergency thermal blanket"),
        ];

        for (guidance, name) in expected {
            assert_eq!(first_item(*guidance), *name, "{guidance}");
        }

        let mut distinct = GUIDANCE_ENTRIES.iter().map(|(_, text)| *text).collect::<Vec<_>>();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct
            .iter()
            .all(|text| expected.iter().any(|(known, _)| known == text)));
    }

    #[test]
    fn hint_wins_over_guidance_text() {
        let items = supply_recommendations("fever", Some("1. Cool the burn under water."));
        assert_eq!(items[0].name, "Digital thermometer");
    }

    #[test]
    fn top_and_minimum_urgency_filters() {
        let items = supply_recommendations("broken arm", None);
        let top = top_supplies(&items, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "SAM splint");

        let critical = at_least(&items, Urgency::Critical);
        assert!(critical.iter().all(|item| item.urgency == Urgency::Critical));
        assert_eq!(critical.len(), 1);
    }
}
