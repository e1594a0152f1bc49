//! Static first-aid tables.
//!
//! Order inside each table is matching priority: the first key contained in
//! the input wins, so life-threatening and more specific keys come first and
//! short generic keys come last.

use crate::models::{
    FollowUpQuestionSet, KeywordEntry, KnowledgeEntry, SupplyRecommendation, Urgency,
};

// --- Guidance texts ---

pub(crate) const GENERIC_GUIDANCE: &str = "1. Make sure the scene is safe for you and the injured person.
2. Call emergency services (911 or your local emergency number) if the person is seriously hurt, or if you are unsure.
3. Check whether the person is responsive and breathing normally.
4. Keep the person still, warm and comfortable, and do not give them anything to eat or drink.
5. Stay with the person and watch for changes until help arrives.";

pub(crate) const CHOKING: &str = "1. Ask \"Are you choking?\" If the person cannot speak, cough or breathe, act immediately.
2. Have someone call emergency services while you help.
3. Give up to 5 firm back blows between the shoulder blades with the heel of your hand.
4. Give up to 5 abdominal thrusts: stand behind them, place a fist just above the navel and pull sharply inward and upward.
5. Keep alternating 5 back blows and 5 abdominal thrusts until the object comes out.
6. If the person becomes unresponsive, lower them to the ground and start CPR.
7. For an infant under 1 year, use 5 back blows and 5 chest thrusts with two fingers instead of abdominal thrusts.";

pub(crate) const CARDIAC_ARREST: &str = "1. Call emergency services immediately and put the phone on speaker.
2. Send someone to find an AED (automated external defibrillator).
3. Start CPR: push hard and fast in the center of the chest, 100 to 120 compressions per minute, at least 5 cm deep.
4. If trained, give 2 rescue breaths after every 30 compressions; otherwise continue hands-only CPR.
5. Turn on the AED as soon as it arrives and follow its voice prompts.
6. Do not stop until the person starts breathing, help takes over, or you are too exhausted to continue.";

pub(crate) const HEART_ATTACK: &str = "1. Call emergency services immediately. Do not drive yourself to the hospital.
2. Help the person sit down and rest in a comfortable position, usually half sitting with knees bent.
3. If they are not allergic, give one adult aspirin (300 mg) to chew slowly.
4. If they have prescribed nitroglycerin, help them take it as directed.
5. Loosen tight clothing and keep them calm.
6. If they become unresponsive and stop breathing normally, start CPR.";

pub(crate) const STROKE: &str = "1. Call emergency services immediately and note the time symptoms started.
2. Use FAST: Face drooping, Arm weakness, Speech difficulty, Time to call.
3. Keep the person lying on their side with head slightly raised.
4. Do not give them anything to eat, drink or any medication.
5. Loosen tight clothing and reassure them.
6. Monitor breathing and be ready to start CPR.";

pub(crate) const SEVERE_BLEEDING: &str = "1. Call emergency services immediately.
2. Apply firm, direct pressure on the wound with a clean cloth or dressing.
3. Do not remove the cloth if blood soaks through; add more layers on top.
4. If bleeding from a limb does not stop with pressure, apply a tourniquet 5 to 8 cm above the wound and note the time.
5. Keep the person lying down and warm to reduce shock.
6. Do not remove any embedded object; pad around it instead.";

pub(crate) const HEAD_INJURY: &str = "1. Call emergency services for serious injury.
2. Keep the person still and support the head and neck in line with the body.
3. Do not move them unless they are in immediate danger.
4. If they are not breathing normally, start CPR.
5. Control any scalp bleeding with gentle pressure from a clean cloth.
6. If they vomit, roll them onto their side while keeping the head, neck and body aligned.
7. Watch for confusion, drowsiness, unequal pupils or repeated vomiting and report them to responders.";

pub(crate) const UNCONSCIOUS: &str = "1. Call emergency services immediately.
2. Tap their shoulders and shout to check for a response.
3. Tilt the head back and lift the chin to open the airway, then check breathing for no more than 10 seconds.
4. If they are breathing, place them in the recovery position on their side.
5. If they are not breathing normally, start CPR.
6. Stay with them and keep checking their breathing until help arrives.";

pub(crate) const SEIZURE: &str = "1. Stay calm and time the seizure.
2. Clear the area of hard or sharp objects and cushion the head.
3. Do not restrain the person and never put anything in their mouth.
4. Once the shaking stops, roll them onto their side in the recovery position.
5. Call emergency services if the seizure lasts more than 5 minutes, repeats, happens in water, or the person is injured, pregnant or does not wake up.
6. Stay with them and speak calmly while they recover.";

pub(crate) const HEAT_STROKE: &str = "1. Call emergency services. Heat stroke is life-threatening.
2. Move the person to a cool, shaded place.
3. Cool them rapidly: cold water on the skin, wet cloths, fanning, or ice packs on the neck, armpits and groin.
4. Remove excess clothing.
5. If they are fully awake and able to swallow, give small sips of cool water.
6. Keep cooling until help arrives or their temperature drops.";

pub(crate) const HEAT_EXHAUSTION: &str = "1. Move the person to a cool place and have them lie down with legs slightly raised.
2. Loosen or remove heavy clothing.
3. Give cool water or an electrolyte drink in small sips.
4. Cool the skin with wet cloths and fanning.
5. Call emergency services if symptoms worsen, they become confused, or they do not improve within 30 minutes.";

pub(crate) const ANAPHYLAXIS: &str = "1. Call emergency services immediately.
2. Use their epinephrine auto-injector (EpiPen) on the outer thigh right away if they have one.
3. Help them sit up if breathing is hard, or lie flat with legs raised if they feel faint.
4. Give a second dose after 5 to 15 minutes if symptoms do not improve and a second injector is available.
5. Start CPR if they stop breathing normally.";

pub(crate) const ALLERGIC_REACTION: &str = "1. Remove or avoid the suspected trigger.
2. Give an oral antihistamine if available and the person can swallow.
3. Watch for swelling of the lips, tongue or throat, wheezing or difficulty breathing.
4. If any breathing difficulty or throat swelling appears, use an epinephrine auto-injector if available and call emergency services.
5. Keep the person calm and seated upright.";

pub(crate) const ASTHMA: &str = "1. Help the person sit upright and stay calm.
2. Help them use their reliever inhaler: 1 puff every 30 to 60 seconds, up to 10 puffs.
3. Loosen tight clothing.
4. Call emergency services if breathing does not improve, lips turn blue, or they cannot speak in full sentences.
5. Repeat the inhaler doses every 15 minutes while waiting for help.";

pub(crate) const FOOD_POISONING: &str = "1. Have the person rest and sip small amounts of water or an oral rehydration solution.
2. Avoid solid food until vomiting stops, then start with bland food.
3. Do not give anti-diarrhea medicine to children without medical advice.
4. Seek medical care for blood in vomit or stool, high fever, signs of dehydration, or symptoms lasting more than 2 days.";

pub(crate) const CHEMICAL_BURN: &str = "1. Protect yourself with gloves before touching the chemical.
2. Brush off any dry chemical, then remove contaminated clothing and jewelry.
3. Flush the area with cool running water for at least 20 minutes.
4. For chemicals in the eye, hold the eyelid open and rinse continuously with water.
5. Call emergency services or poison control and keep the product label for responders.";

pub(crate) const POISONING: &str = "1. Call poison control or emergency services immediately.
2. Do not make the person vomit unless told to by poison control.
3. Keep the container or label of the substance for responders.
4. If the poison is on the skin, remove contaminated clothing and rinse the skin with water for 15 to 20 minutes.
5. If the person is unresponsive or not breathing, start CPR.";

pub(crate) const ELECTRIC_SHOCK: &str = "1. Do not touch the person until the power source is switched off.
2. Turn off the power at the mains, or move the source away with a dry non-conductive object such as wood.
3. Call emergency services.
4. Check breathing and start CPR if needed.
5. Cover any burns with a sterile, non-fluffy dressing.";

pub(crate) const DROWNING: &str = "1. Get the person out of the water only if it is safe for you to do so.
2. Call emergency services.
3. Check breathing. If they are not breathing normally, give 5 rescue breaths and then start CPR.
4. If they are breathing, place them in the recovery position and keep them warm.
5. Everyone rescued from drowning should be checked at a hospital, even if they seem fine.";

pub(crate) const HYPOTHERMIA: &str = "1. Call emergency services for severe shivering, confusion or drowsiness.
2. Move the person to a warm, dry place.
3. Remove wet clothing and wrap them in dry blankets, covering the head.
4. Warm the center of the body first; do not rub the arms and legs.
5. Give warm, sweet, non-alcoholic drinks if they are fully awake.
6. Do not use direct heat such as hot water or heating pads.";

pub(crate) const FROSTBITE: &str = "1. Move the person to a warm place.
2. Do not rub the affected area and do not rewarm it if it could refreeze.
3. Soak the area in warm, not hot, water (37 to 39 C) for 15 to 30 minutes.
4. Cover with dry, sterile dressings and separate affected fingers or toes.
5. Seek medical care for blisters, numbness or skin that stays pale or hard.";

pub(crate) const FRACTURE: &str = "1. Call emergency services if the bone is visible, the limb is deformed, or the injury is to the head, neck, back or hip.
2. Do not try to straighten the limb.
3. Immobilize the injured area with a splint or padding in the position found.
4. Apply an ice pack wrapped in cloth for up to 20 minutes to reduce swelling.
5. Stop any bleeding with gentle pressure around the wound.
6. Watch for shock: pale skin, rapid breathing, confusion.";

pub(crate) const SPRAIN: &str = "1. Rest the injured joint and avoid putting weight on it.
2. Apply an ice pack wrapped in cloth for 15 to 20 minutes every 2 to 3 hours.
3. Compress with an elastic bandage, snug but not tight.
4. Elevate the limb above heart level.
5. Seek medical care if the person cannot bear weight or the pain is severe.";

pub(crate) const NOSEBLEED: &str = "1. Have the person sit up and lean slightly forward.
2. Pinch the soft part of the nose firmly for 10 to 15 minutes without letting go.
3. Breathe through the mouth and spit out any blood.
4. Apply a cold compress to the bridge of the nose.
5. Seek medical care if bleeding lasts more than 20 minutes or follows a head injury.";

pub(crate) const MINOR_WOUND: &str = "1. Wash your hands and put on gloves if available.
2. Apply gentle pressure with a clean cloth until the bleeding stops.
3. Rinse the wound under clean running water.
4. Apply a thin layer of antibiotic ointment.
5. Cover with a sterile bandage and change it daily.
6. Seek medical care if the wound is deep, gaping, or shows signs of infection.";

pub(crate) const BURN: &str = "1. Cool the burn under cool running water for at least 20 minutes.
2. Remove jewelry and clothing near the burn unless stuck to the skin.
3. Cover loosely with cling film or a sterile, non-fluffy dressing.
4. Do not apply ice, butter or creams, and do not pop blisters.
5. Call emergency services for large burns, burns to the face, hands or genitals, or burns in children.";

pub(crate) const SUNBURN: &str = "1. Get out of the sun and cool the skin with a cool shower or damp cloths.
2. Apply aloe vera or a moisturizing lotion.
3. Drink extra water.
4. Take pain relief such as ibuprofen if needed.
5. Seek medical care for blistering over a large area, fever or chills.";

pub(crate) const SNAKE_BITE: &str = "1. Call emergency services immediately.
2. Keep the person still and calm to slow the spread of venom.
3. Keep the bitten limb at or below heart level.
4. Remove rings, watches and tight clothing near the bite.
5. Do not cut the wound, suck out venom, or apply ice or a tourniquet.
6. Note the snake's appearance if it is safe to do so.";

pub(crate) const INSECT_STING: &str = "1. Scrape the stinger out sideways with a card or fingernail; do not squeeze it.
2. Wash the area with soap and water.
3. Apply a cold pack for 10 minutes to reduce swelling.
4. Take an antihistamine for itching if needed.
5. Call emergency services if there is swelling of the face or throat or difficulty breathing.";

pub(crate) const ANIMAL_BITE: &str = "1. Control bleeding with firm pressure.
2. Wash the bite thoroughly with soap and running water for 5 minutes.
3. Cover with a clean dressing.
4. Seek medical care for deep bites, bites from wild or unknown animals, or signs of infection.
5. Ask about tetanus and rabies protection.";

pub(crate) const EYE_INJURY: &str = "1. Do not rub the eye.
2. For dust or grit, rinse the eye with clean water or saline.
3. Do not try to remove an object stuck in the eye; cover both eyes loosely.
4. For a blow to the eye, apply a cold compress without pressing on the eye.
5. Seek medical care for pain, vision changes or an embedded object.";

pub(crate) const LOW_BLOOD_SUGAR: &str = "1. If the person is awake and can swallow, give 15 to 20 g of fast sugar: juice, regular soda, glucose tablets or candy.
2. Wait 15 minutes and give more sugar if they do not improve.
3. Once they feel better, give a snack with carbohydrates and protein.
4. Call emergency services if they become unresponsive, cannot swallow, or do not improve.
5. Never put food or drink into the mouth of an unresponsive person.";

pub(crate) const PANIC_ATTACK: &str = "1. Move the person to a quiet place and stay with them.
2. Speak calmly and reassure them that the attack will pass.
3. Guide slow breathing: in for 4 seconds, hold for 4, out for 6.
4. Help them focus on something they can see, hear or touch.
5. Call emergency services if there is chest pain or the symptoms do not ease, since they can resemble a heart attack.";

pub(crate) const FEVER: &str = "1. Have the person rest and drink plenty of fluids.
2. Dress them in light clothing and keep the room comfortably cool.
3. Give acetaminophen or ibuprofen at the correct dose for their age and weight.
4. Do not give aspirin to children or teenagers.
5. Seek medical care for a fever over 39.4 C, a fever in an infant under 3 months, a stiff neck, rash, confusion or a seizure.";

pub(crate) const CHILDBIRTH: &str = "1. Call emergency services.
2. Help the mother lie on her back with knees bent, or in a comfortable position she chooses.
3. Wash your hands and place clean towels under her.
4. Support the baby's head as it emerges; do not pull.
5. Dry the baby, place it skin to skin on the mother's chest and cover both.
6. Do not cut the cord; wait for responders.";

pub(crate) const DENTAL_INJURY: &str = "1. Hold the knocked-out tooth by the crown, not the root.
2. Rinse it briefly in milk or saline if dirty; do not scrub it.
3. Try to put it back in the socket, or keep it in milk or the person's saliva.
4. Control bleeding by biting on gauze.
5. See a dentist within 30 minutes.";

pub(crate) const SHOCK: &str = "1. Call emergency services.
2. Lay the person down and raise their legs about 30 cm unless this causes pain.
3. Keep them warm with a blanket.
4. Do not give them anything to eat or drink.
5. Treat any obvious cause such as bleeding.
6. Monitor breathing and start CPR if needed.";

// --- Guidance trigger keys, in priority order ---

pub(crate) const GUIDANCE_ENTRIES: &[KnowledgeEntry] = &[
    ("choking", CHOKING),
    ("choke", CHOKING),
    ("heimlich", CHOKING),
    ("stuck in throat", CHOKING),
    ("not breathing", CARDIAC_ARREST),
    ("stopped breathing", CARDIAC_ARREST),
    ("cardiac arrest", CARDIAC_ARREST),
    ("no pulse", CARDIAC_ARREST),
    ("no heartbeat", CARDIAC_ARREST),
    ("cpr", CARDIAC_ARREST),
    ("heart attack", HEART_ATTACK),
    ("chest pain", HEART_ATTACK),
    ("chest pressure", HEART_ATTACK),
    ("chest tightness", HEART_ATTACK),
    ("pain in chest", HEART_ATTACK),
    ("pain in my chest", HEART_ATTACK),
    ("heat stroke", HEAT_STROKE),
    ("heatstroke", HEAT_STROKE),
    ("sunstroke", HEAT_STROKE),
    ("stroke", STROKE),
    ("face drooping", STROKE),
    ("slurred speech", STROKE),
    ("arm weakness", STROKE),
    ("severe bleeding", SEVERE_BLEEDING),
    ("heavy bleeding", SEVERE_BLEEDING),
    ("bleeding heavily", SEVERE_BLEEDING),
    ("won't stop bleeding", SEVERE_BLEEDING),
    ("spurting blood", SEVERE_BLEEDING),
    ("stab wound", SEVERE_BLEEDING),
    ("stabbed", SEVERE_BLEEDING),
    ("gunshot", SEVERE_BLEEDING),
    ("amputat", SEVERE_BLEEDING),
    ("head injury", HEAD_INJURY),
    ("hit head", HEAD_INJURY),
    ("hit his head", HEAD_INJURY),
    ("hit her head", HEAD_INJURY),
    ("hit their head", HEAD_INJURY),
    ("hit my head", HEAD_INJURY),
    ("concussion", HEAD_INJURY),
    ("fell", HEAD_INJURY),
    ("fall", HEAD_INJURY),
    ("unconscious", UNCONSCIOUS),
    ("unresponsive", UNCONSCIOUS),
    ("not responding", UNCONSCIOUS),
    ("passed out", UNCONSCIOUS),
    ("fainted", UNCONSCIOUS),
    ("collapsed", UNCONSCIOUS),
    ("seizure", SEIZURE),
    ("convuls", SEIZURE),
    ("epilep", SEIZURE),
    ("heat exhaustion", HEAT_EXHAUSTION),
    ("overheat", HEAT_EXHAUSTION),
    ("dehydrat", HEAT_EXHAUSTION),
    ("anaphyla", ANAPHYLAXIS),
    ("throat swelling", ANAPHYLAXIS),
    ("throat is swelling", ANAPHYLAXIS),
    ("epipen", ANAPHYLAXIS),
    ("allergic reaction", ALLERGIC_REACTION),
    ("allergies", ALLERGIC_REACTION),
    ("allergy", ALLERGIC_REACTION),
    ("allergic", ALLERGIC_REACTION),
    ("hives", ALLERGIC_REACTION),
    ("asthma", ASTHMA),
    ("difficulty breathing", ASTHMA),
    ("trouble breathing", ASTHMA),
    ("shortness of breath", ASTHMA),
    ("can't breathe", ASTHMA),
    ("cannot breathe", ASTHMA),
    ("wheez", ASTHMA),
    ("food poisoning", FOOD_POISONING),
    ("vomiting", FOOD_POISONING),
    ("throwing up", FOOD_POISONING),
    ("diarrhea", FOOD_POISONING),
    ("chemical burn", CHEMICAL_BURN),
    ("chemical in eye", CHEMICAL_BURN),
    ("chemical in my eye", CHEMICAL_BURN),
    ("poison", POISONING),
    ("overdose", POISONING),
    ("swallowed", POISONING),
    ("ingested", POISONING),
    ("bleach", POISONING),
    ("electric shock", ELECTRIC_SHOCK),
    ("electrocut", ELECTRIC_SHOCK),
    ("drowning", DROWNING),
    ("drowned", DROWNING),
    ("pulled from water", DROWNING),
    ("swimming accident", DROWNING),
    ("hypothermia", HYPOTHERMIA),
    ("cold body temperature", HYPOTHERMIA),
    ("freezing", HYPOTHERMIA),
    ("shivering", HYPOTHERMIA),
    ("frostbite", FROSTBITE),
    ("frostnip", FROSTBITE),
    ("fracture", FRACTURE),
    ("broken bone", FRACTURE),
    ("broken arm", FRACTURE),
    ("broken leg", FRACTURE),
    ("broken wrist", FRACTURE),
    ("bone sticking out", FRACTURE),
    ("sprain", SPRAIN),
    ("twisted ankle", SPRAIN),
    ("rolled ankle", SPRAIN),
    ("pulled muscle", SPRAIN),
    ("swelling", ALLERGIC_REACTION),
    ("nosebleed", NOSEBLEED),
    ("nose bleed", NOSEBLEED),
    ("bloody nose", NOSEBLEED),
    ("nose is bleeding", NOSEBLEED),
    ("sunburn", SUNBURN),
    ("burn", BURN),
    ("scald", BURN),
    ("snake", SNAKE_BITE),
    ("bee sting", INSECT_STING),
    ("wasp", INSECT_STING),
    ("stung", INSECT_STING),
    ("insect bite", INSECT_STING),
    ("dog bite", ANIMAL_BITE),
    ("animal bite", ANIMAL_BITE),
    ("bitten", ANIMAL_BITE),
    ("knocked out tooth", DENTAL_INJURY),
    ("tooth knocked out", DENTAL_INJURY),
    ("eye injury", EYE_INJURY),
    ("something in my eye", EYE_INJURY),
    ("something in eye", EYE_INJURY),
    ("low blood sugar", LOW_BLOOD_SUGAR),
    ("hypoglyc", LOW_BLOOD_SUGAR),
    ("diabetic", LOW_BLOOD_SUGAR),
    ("insulin", LOW_BLOOD_SUGAR),
    ("panic attack", PANIC_ATTACK),
    ("anxiety attack", PANIC_ATTACK),
    ("hyperventilat", PANIC_ATTACK),
    ("giving birth", CHILDBIRTH),
    ("in labor", CHILDBIRTH),
    ("water broke", CHILDBIRTH),
    ("contractions", CHILDBIRTH),
    ("in shock", SHOCK),
    ("cold and clammy", SHOCK),
    ("pale and clammy", SHOCK),
    ("fever", FEVER),
    ("high temperature", FEVER),
    ("bleeding", MINOR_WOUND),
    ("laceration", MINOR_WOUND),
    ("scrape", MINOR_WOUND),
    ("graze", MINOR_WOUND),
    ("wound", MINOR_WOUND),
    ("cut", MINOR_WOUND),
];

// --- Follow-up questions ---

pub const BREATHING_STATUS_QUESTION: &str = "Is the person breathing normally?";

pub(crate) const DEFAULT_QUESTIONS: FollowUpQuestionSet = &[
    "When did this start?",
    "Is the person conscious and breathing normally?",
    "Is there any heavy bleeding?",
    "Does the person have any known medical conditions or allergies?",
];

const CHOKING_QUESTIONS: FollowUpQuestionSet = &[
    "Can the person speak, cough or breathe at all?",
    "Is the person an adult, a child or an infant under 1 year?",
    "Do you know what they were choking on?",
];

const UNCONSCIOUS_QUESTIONS: FollowUpQuestionSet = &[
    BREATHING_STATUS_QUESTION,
    "Do they respond when you tap their shoulders and shout?",
    "Did they fall or hit their head?",
    "Do they have a known condition such as diabetes, epilepsy or heart disease?",
];

const CARDIAC_ARREST_QUESTIONS: FollowUpQuestionSet = &[
    "Has someone called emergency services?",
    "Is an AED (defibrillator) available nearby?",
    "Has anyone started CPR?",
];

const CHEST_PAIN_QUESTIONS: FollowUpQuestionSet = &[
    "Is the pain spreading to the arm, jaw, neck or back?",
    "Is the person short of breath, sweating or nauseous?",
    "Do they have a history of heart problems?",
    "Are they allergic to aspirin?",
];

const STROKE_QUESTIONS: FollowUpQuestionSet = &[
    "When did the symptoms start?",
    "Is one side of the face drooping?",
    "Can they raise both arms and speak clearly?",
];

const BLEEDING_QUESTIONS: FollowUpQuestionSet = &[
    "Is the blood spurting or flowing steadily?",
    "Where on the body is the wound?",
    "Has direct pressure slowed the bleeding?",
    "Is there an object stuck in the wound?",
];

const HEAD_INJURY_QUESTIONS: FollowUpQuestionSet = &[
    "Did the person lose consciousness, even briefly?",
    "Are they confused, drowsy or vomiting?",
    "Do they have neck pain or numbness in the arms or legs?",
];

const SEIZURE_QUESTIONS: FollowUpQuestionSet = &[
    "How long has the seizure lasted?",
    "Is this their first seizure?",
    "Did they hit their head or fall into water?",
];

const ALLERGY_QUESTIONS: FollowUpQuestionSet = &[
    "Is there swelling of the lips, tongue or throat?",
    "Are they having trouble breathing?",
    "Do they carry an epinephrine auto-injector?",
    "What were they exposed to?",
];

const BREATHING_QUESTIONS: FollowUpQuestionSet = &[
    "Can they speak in full sentences?",
    "Are their lips or fingertips turning blue?",
    "Do they have an inhaler with them?",
];

const POISONING_QUESTIONS: FollowUpQuestionSet = &[
    "What substance was involved and how much?",
    "When did the exposure happen?",
    "Is the person awake and breathing normally?",
];

const BURN_QUESTIONS: FollowUpQuestionSet = &[
    "What caused the burn: heat, chemical or electricity?",
    "How large is the burned area?",
    "Is the face, hands or genitals affected?",
];

const FRACTURE_QUESTIONS: FollowUpQuestionSet = &[
    "Is the bone visible or the limb deformed?",
    "Can they move the fingers or toes below the injury?",
    "Is the skin below the injury pale or cold?",
];

const FEVER_QUESTIONS: FollowUpQuestionSet = &[
    "What is the measured temperature?",
    "How old is the person?",
    "Do they have a stiff neck, rash or confusion?",
];

const TEMPERATURE_QUESTIONS: FollowUpQuestionSet = &[
    "Is the person confused or unusually drowsy?",
    "Are they still shivering or sweating?",
    "How long were they exposed?",
];

pub(crate) const QUESTION_ENTRIES: &[KeywordEntry<'static, FollowUpQuestionSet>] = &[
    ("choking", CHOKING_QUESTIONS),
    ("choke", CHOKING_QUESTIONS),
    ("unconscious", UNCONSCIOUS_QUESTIONS),
    ("unresponsive", UNCONSCIOUS_QUESTIONS),
    ("not responding", UNCONSCIOUS_QUESTIONS),
    ("passed out", UNCONSCIOUS_QUESTIONS),
    ("collapsed", UNCONSCIOUS_QUESTIONS),
    ("fainted", UNCONSCIOUS_QUESTIONS),
    ("not breathing", CARDIAC_ARREST_QUESTIONS),
    ("no pulse", CARDIAC_ARREST_QUESTIONS),
    ("cardiac arrest", CARDIAC_ARREST_QUESTIONS),
    ("chest", CHEST_PAIN_QUESTIONS),
    ("heart", CHEST_PAIN_QUESTIONS),
    ("heat stroke", TEMPERATURE_QUESTIONS),
    ("stroke", STROKE_QUESTIONS),
    ("slurred", STROKE_QUESTIONS),
    ("bleeding", BLEEDING_QUESTIONS),
    ("blood", BLEEDING_QUESTIONS),
    ("head", HEAD_INJURY_QUESTIONS),
    ("fell", HEAD_INJURY_QUESTIONS),
    ("fall", HEAD_INJURY_QUESTIONS),
    ("seizure", SEIZURE_QUESTIONS),
    ("convuls", SEIZURE_QUESTIONS),
    ("allerg", ALLERGY_QUESTIONS),
    ("anaphyla", ALLERGY_QUESTIONS),
    ("bee sting", ALLERGY_QUESTIONS),
    ("wasp sting", ALLERGY_QUESTIONS),
    ("insect sting", ALLERGY_QUESTIONS),
    ("stung", ALLERGY_QUESTIONS),
    ("swelling", ALLERGY_QUESTIONS),
    ("breath", BREATHING_QUESTIONS),
    ("asthma", BREATHING_QUESTIONS),
    ("wheez", BREATHING_QUESTIONS),
    ("poison", POISONING_QUESTIONS),
    ("overdose", POISONING_QUESTIONS),
    ("swallowed", POISONING_QUESTIONS),
    ("burn", BURN_QUESTIONS),
    ("scald", BURN_QUESTIONS),
    ("broken", FRACTURE_QUESTIONS),
    ("fracture", FRACTURE_QUESTIONS),
    ("sprain", FRACTURE_QUESTIONS),
    ("fever", FEVER_QUESTIONS),
    ("hypotherm", TEMPERATURE_QUESTIONS),
    ("heat", TEMPERATURE_QUESTIONS),
    ("cold", TEMPERATURE_QUESTIONS),
];

// --- Supply recommendations ---

const fn supply(
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    urgency: Urgency,
) -> SupplyRecommendation {
    SupplyRecommendation {
        name,
        description,
        price,
        category,
        urgency,
    }
}

pub(crate) const DEFAULT_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "General first aid kit",
        "Bandages, gauze, tape, antiseptic wipes and gloves for everyday injuries.",
        29.99,
        "first-aid",
        Urgency::Recommended,
    ),
    supply(
        "Pain relief tablets",
        "Acetaminophen or ibuprofen for pain and fever.",
        7.49,
        "medication",
        Urgency::Normal,
    ),
];

const BLEEDING_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Tourniquet",
        "Windlass tourniquet for life-threatening limb bleeding.",
        32.00,
        "trauma",
        Urgency::Critical,
    ),
    supply(
        "Hemostatic gauze",
        "Gauze treated with a clotting agent for deep wounds.",
        24.99,
        "trauma",
        Urgency::Critical,
    ),
    supply(
        "Pressure bandage",
        "Emergency bandage with a built-in pressure bar.",
        9.99,
        "wound-care",
        Urgency::Recommended,
    ),
    supply(
        "Nitrile gloves",
        "Disposable gloves to protect against blood contact.",
        6.49,
        "protection",
        Urgency::Normal,
    ),
];

const WOUND_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Sterile gauze pads",
        "Absorbent pads for covering and cleaning wounds.",
        5.99,
        "wound-care",
        Urgency::Recommended,
    ),
    supply(
        "Antibiotic ointment",
        "Helps prevent infection in minor cuts and scrapes.",
        6.99,
        "medication",
        Urgency::Recommended,
    ),
    supply(
        "Adhesive bandages",
        "Assorted sizes for small cuts.",
        4.49,
        "wound-care",
        Urgency::Normal,
    ),
];

const BURN_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Burn dressing",
        "Hydrogel dressing that cools and protects burned skin.",
        14.99,
        "burn-care",
        Urgency::Critical,
    ),
    supply(
        "Cling film",
        "Loose, non-stick covering for burns on the way to care.",
        3.99,
        "burn-care",
        Urgency::Recommended,
    ),
    supply(
        "Aloe vera gel",
        "Soothes minor burns and sunburn.",
        8.49,
        "skin-care",
        Urgency::Normal,
    ),
];

const ALLERGY_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Epinephrine auto-injector",
        "Prescription emergency treatment for anaphylaxis.",
        110.00,
        "medication",
        Urgency::Critical,
    ),
    supply(
        "Antihistamine tablets",
        "Relief for mild allergic reactions, hives and itching.",
        8.99,
        "medication",
        Urgency::Recommended,
    ),
    supply(
        "Instant cold pack",
        "Reduces swelling and pain from injuries and stings.",
        4.99,
        "cold-therapy",
        Urgency::Normal,
    ),
];

const CARDIAC_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "AED (automated external defibrillator)",
        "Delivers a shock to restore heart rhythm during cardiac arrest.",
        1299.00,
        "cardiac",
        Urgency::Critical,
    ),
    supply(
        "Chewable aspirin",
        "Low-cost aspirin for suspected heart attack when not allergic.",
        5.49,
        "medication",
        Urgency::Critical,
    ),
    supply(
        "CPR face shield",
        "Barrier for giving rescue breaths.",
        7.99,
        "protection",
        Urgency::Recommended,
    ),
];

const AIRWAY_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Anti-choking suction device",
        "Single-use airway clearing device for choking emergencies.",
        29.99,
        "airway",
        Urgency::Critical,
    ),
    supply(
        "CPR face shield",
        "Barrier for giving rescue breaths.",
        7.99,
        "protection",
        Urgency::Recommended,
    ),
];

const BREATHING_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Spacer for inhaler",
        "Improves inhaler delivery during an asthma attack.",
        15.99,
        "respiratory",
        Urgency::Critical,
    ),
    supply(
        "Pulse oximeter",
        "Measures blood oxygen level and pulse.",
        24.99,
        "monitoring",
        Urgency::Recommended,
    ),
];

const FRACTURE_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "SAM splint",
        "Moldable splint for immobilizing limbs.",
        17.99,
        "orthopedic",
        Urgency::Critical,
    ),
    supply(
        "Elastic bandage",
        "Compression wrap for sprains and strains.",
        6.99,
        "orthopedic",
        Urgency::Recommended,
    ),
    supply(
        "Instant cold pack",
        "Reduces swelling and pain from injuries and stings.",
        4.99,
        "cold-therapy",
        Urgency::Recommended,
    ),
    supply(
        "Triangular bandage",
        "Makes an arm sling or secures a splint.",
        3.99,
        "orthopedic",
        Urgency::Normal,
    ),
];

const COLD_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Emergency thermal blanket",
        "Reflective blanket that retains body heat.",
        4.99,
        "thermal",
        Urgency::Critical,
    ),
    supply(
        "Chemical hand warmers",
        "Gentle heat for hands and the body core.",
        6.99,
        "thermal",
        Urgency::Recommended,
    ),
];

const HEAT_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Oral rehydration salts",
        "Electrolyte mix for dehydration and heat illness.",
        9.99,
        "hydration",
        Urgency::Critical,
    ),
    supply(
        "Instant cold pack",
        "Reduces swelling and pain from injuries and stings.",
        4.99,
        "cold-therapy",
        Urgency::Recommended,
    ),
    supply(
        "Digital thermometer",
        "Fast, accurate temperature readings.",
        12.99,
        "monitoring",
        Urgency::Normal,
    ),
];

const FEVER_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Digital thermometer",
        "Fast, accurate temperature readings.",
        12.99,
        "monitoring",
        Urgency::Recommended,
    ),
    supply(
        "Fever reducer",
        "Acetaminophen or ibuprofen dosed for age and weight.",
        7.99,
        "medication",
        Urgency::Recommended,
    ),
    supply(
        "Oral rehydration salts",
        "Electrolyte mix for dehydration and heat illness.",
        9.99,
        "hydration",
        Urgency::Normal,
    ),
];

const POISONING_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Poison control magnet",
        "Keeps the poison control number visible at home.",
        1.99,
        "information",
        Urgency::Recommended,
    ),
    supply(
        "Cabinet safety locks",
        "Keeps medicines and chemicals out of reach of children.",
        12.99,
        "prevention",
        Urgency::Normal,
    ),
];

const DIABETES_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Glucose tablets",
        "Fast-acting sugar for low blood sugar episodes.",
        6.99,
        "diabetes",
        Urgency::Critical,
    ),
    supply(
        "Blood glucose meter",
        "Checks blood sugar levels at home.",
        24.99,
        "monitoring",
        Urgency::Recommended,
    ),
];

const EYE_SUPPLIES: &[SupplyRecommendation] = &[
    supply(
        "Sterile eye wash",
        "Saline solution for flushing debris and chemicals.",
        7.99,
        "eye-care",
        Urgency::Critical,
    ),
    supply(
        "Eye pads",
        "Sterile pads to cover an injured eye.",
        5.49,
        "eye-care",
        Urgency::Recommended,
    ),
];

/// Matched against the emergency text or a caller's category hint.
pub(crate) const SUPPLY_ENTRIES: &[KeywordEntry<'static, &'static [SupplyRecommendation]>] = &[
    ("choking", AIRWAY_SUPPLIES),
    ("choke", AIRWAY_SUPPLIES),
    ("not breathing", CARDIAC_SUPPLIES),
    ("cardiac", CARDIAC_SUPPLIES),
    ("cpr", CARDIAC_SUPPLIES),
    ("severe bleeding", BLEEDING_SUPPLIES),
    ("heavy bleeding", BLEEDING_SUPPLIES),
    ("tourniquet", BLEEDING_SUPPLIES),
    ("anaphyla", ALLERGY_SUPPLIES),
    ("allerg", ALLERGY_SUPPLIES),
    ("epinephrine", ALLERGY_SUPPLIES),
    ("bee sting", ALLERGY_SUPPLIES),
    ("wasp sting", ALLERGY_SUPPLIES),
    ("insect sting", ALLERGY_SUPPLIES),
    ("stung", ALLERGY_SUPPLIES),
    ("hives", ALLERGY_SUPPLIES),
    ("asthma", BREATHING_SUPPLIES),
    ("inhaler", BREATHING_SUPPLIES),
    ("wheez", BREATHING_SUPPLIES),
    ("heart attack", CARDIAC_SUPPLIES),
    ("chest pain", CARDIAC_SUPPLIES),
    ("chemical", EYE_SUPPLIES),
    ("eye", EYE_SUPPLIES),
    ("burn", BURN_SUPPLIES),
    ("scald", BURN_SUPPLIES),
    ("fracture", FRACTURE_SUPPLIES),
    ("broken", FRACTURE_SUPPLIES),
    ("sprain", FRACTURE_SUPPLIES),
    ("splint", FRACTURE_SUPPLIES),
    ("hypotherm", COLD_SUPPLIES),
    ("frostbite", COLD_SUPPLIES),
    ("shivering", COLD_SUPPLIES),
    ("heat", HEAT_SUPPLIES),
    ("dehydrat", HEAT_SUPPLIES),
    ("fever", FEVER_SUPPLIES),
    ("poison", POISONING_SUPPLIES),
    ("overdose", POISONING_SUPPLIES),
    ("blood sugar", DIABETES_SUPPLIES),
    ("diabet", DIABETES_SUPPLIES),
    ("glucose", DIABETES_SUPPLIES),
    ("bleeding", WOUND_SUPPLIES),
    ("wound", WOUND_SUPPLIES),
    ("cut", WOUND_SUPPLIES),
    ("scrape", WOUND_SUPPLIES),
];

/// Matched against resolved guidance text. Keys are phrases that occur in
/// exactly one family of guidance texts, so the shared CPR and emergency
/// services steps never decide the category. Guidance without a key here
/// (stroke, seizure, snake bite, panic, childbirth, unconsciousness, head
/// injury) gets the default kit.
pub(crate) const GUIDANCE_SUPPLY_ENTRIES: &[KeywordEntry<'static, &'static [SupplyRecommendation]>] = &[
    ("abdominal thrusts", AIRWAY_SUPPLIES),
    ("automated external defibrillator", CARDIAC_SUPPLIES),
    ("nitroglycerin", CARDIAC_SUPPLIES),
    ("rescued from drowning", CARDIAC_SUPPLIES),
    ("apply a tourniquet", BLEEDING_SUPPLIES),
    ("epinephrine auto-injector", ALLERGY_SUPPLIES),
    ("scrape the stinger", ALLERGY_SUPPLIES),
    ("reliever inhaler", BREATHING_SUPPLIES),
    ("brush off any dry chemical", EYE_SUPPLIES),
    ("do not rub the eye", EYE_SUPPLIES),
    ("do not make the person vomit", POISONING_SUPPLIES),
    ("power source", BURN_SUPPLIES),
    ("cool the burn", BURN_SUPPLIES),
    ("aloe vera", BURN_SUPPLIES),
    ("heat stroke", HEAT_SUPPLIES),
    ("electrolyte drink", HEAT_SUPPLIES),
    ("oral rehydration solution", HEAT_SUPPLIES),
    ("remove wet clothing", COLD_SUPPLIES),
    ("refreeze", COLD_SUPPLIES),
    ("keep them warm with a blanket", COLD_SUPPLIES),
    ("immobilize the injured area", FRACTURE_SUPPLIES),
    ("elastic bandage", FRACTURE_SUPPLIES),
    ("glucose tablets", DIABETES_SUPPLIES),
    ("acetaminophen", FEVER_SUPPLIES),
    ("antibiotic ointment", WOUND_SUPPLIES),
    ("pinch the soft part of the nose", WOUND_SUPPLIES),
    ("tetanus", WOUND_SUPPLIES),
    ("biting on gauze", WOUND_SUPPLIES),
];
