//! Built-in phrase lists.
//!
//! `STANDARD_*` are the curated municipal complaint phrases, grouped by
//! department. `KEYWORD_*` are the compact keyword lists used when a
//! lightweight configuration is wanted.

pub const STANDARD_HIGH: &[&str] = &[
    // Water
    "water pipeline burst", "water flooding the street", "no water in the entire area",
    "contaminated drinking water", "water gushing from main pipe",
    "sewage mixing in drinking water", "tank overflow causing damage",
    // Electricity
    "electric shock incident", "power line fell on road", "short circuit with sparks",
    "transformer blast", "exposed live wire", "fire due to electricity",
    // Roads
    "road collapsed", "deep potholes causing accidents", "major road blockage",
    "manhole open in middle of road", "construction debris causing danger",
    // Sanitation
    "open defecation in locality", "biohazard waste dumped publicly",
    "sewage water entering homes", "foul smell causing health issue", "overflowing septic tank",
    // Garbage collection
    "rotting garbage attracting dogs and insects", "garbage heap blocking the road",
    "medical waste dumped publicly", "burning garbage causing suffocation",
    // Street lights
    "electric pole sparking", "short circuit in light", "street light exploded",
    // Drainage
    "drain overflow into homes", "sewage water flooding street", "open drain near school",
    "foul water spreading disease",
    // Public toilets
    "people fainted due to toilet smell", "unhygienic toilet causing illness",
    "no water in toilet leading to public nuisance", "broken toilet exposing waste",
    // Other
    "fire incident", "explosion", "animal attack reported", "serious public safety threat",
    "gas leak from nearby shop", "collapsed wall on footpath", "building about to collapse",
    "major chemical smell in area", "fight breaking out in public", "gunshot heard nearby",
    "gas cylinder blast", "hazardous chemical spill", "ceiling collapse", "tree fell on someone",
    "roof collapsed", "aggressive mob gathering", "people electrocuted", "unattended body on road",
    "fatal accident on main road", "shooting incident", "bridge crack observed",
];

pub const STANDARD_MEDIUM: &[&str] = &[
    // Water
    "water leakage from pipe", "low water pressure", "tap not working",
    "water supply irregular", "pipeline damaged", "water supply only at night",
    // Electricity
    "complete power outage", "fluctuating voltage", "low voltage issue",
    "frequent power cuts", "meter not working", "fuse blown", "electric pole damaged",
    // Roads
    "potholes damaging vehicles", "broken road divider", "footpath broken",
    "speed bump needed", "illegal road encroachment",
    // Sanitation
    "toilet cleaning not done", "dirty community toilets", "clogged bathroom drain",
    "blocked toilet in public area", "waste water stagnant in colony",
    // Garbage collection
    "garbage van not coming for days", "overflowing bin in locality",
    "stray animals scattering trash", "waste pile in market area",
    "improper segregation complaint",
    // Street lights
    "entire street dark", "multiple lights not working", "light pole fallen",
    "damaged electrical wiring", "delay in night lighting",
    // Drainage
    "drain clogged with plastic", "manhole cover missing", "poor drain slope",
    "water standing in drains", "partial blockage",
    // Public toilets
    "toilet door broken", "no electricity inside toilet", "no flush system working",
    "unclean urinals", "used sanitary pads not cleared",
    // Other
    "unauthorized construction", "encroachment on government land",
    "street vendor blocking passage", "abandoned vehicle", "noise pollution late night",
    "cow or buffalo blocking traffic", "temporary tent obstructing path",
    "construction material on footpath", "drunk person creating scene",
    "illegal parking causing jam", "open borewell", "construction without permit",
    "children playing on highway", "beggars harassing public", "animal carcass on road",
    "temporary stage blocking main road", "small fire near garbage",
    "rickshaw obstruction at junction",
];

pub const STANDARD_LOW: &[&str] = &[
    // Water
    "slightly muddy water", "dripping tap", "slow water flow", "request for water tanker",
    "dirty water in overhead tank",
    // Electricity
    "fan not working", "old meter box open", "request for new connection",
    "power on-off issue occasionally", "noisy transformer",
    // Roads
    "uneven road", "minor cracks", "road needs painting", "broken footpath tile",
    "slippery surface after rain",
    // Sanitation
    "bad odor near homes", "insects in wash area", "toilet needs phenyl cleaning",
    "delay in cleaning toilet", "need new toilet seat",
    // Garbage collection
    "garbage smell", "small trash accumulation", "need more bins in area",
    "bin broken or dirty", "request for dry waste pickup",
    // Street lights
    "flickering light", "bulb fused", "request for new street light",
    "light not working in front of house", "light cover broken",
    // Drainage
    "smelly drain", "request for cleaning drain", "mosquito breeding in drain",
    "slow water flow in drain",
    // Public toilets
    "bad odor in toilet", "request for cleaning staff", "toilet tiles broken",
    "lack of soap or sanitizer", "complaint about toilet design",
    // Other
    "street artist causing crowd", "request for tree trimming",
    "complaint about stray dogs", "dog poop in park", "poster litter on walls",
    "hawkers on footpath", "walls being used for urination", "idle vehicles parked long-term",
    "community radio playing loudly", "posters defacing public property",
    "need for dog sterilization", "street children loitering",
    "request for more traffic signs", "temporary wires hanging",
    "request for community notice board", "street bench broken",
];

pub const KEYWORD_HIGH: &[&str] = &[
    "explosion", "fire", "blast", "flood", "short circuit", "electric shock", "gas leak",
    "fatal", "injury", "emergency", "accident", "collapsed", "died", "death", "bleeding",
    "serious", "severe", "critical", "danger", "unsafe", "life-threatening",
];

pub const KEYWORD_MEDIUM: &[&str] = &[
    "water leakage", "leaking", "internet down", "no internet", "power cut", "no electricity",
    "power outage", "power failure", "blocked road", "clogged", "damaged pipe", "crack in wall",
    "no water", "fan not working", "ac not working", "lift stuck", "broken light", "malfunction",
    "low voltage", "overheating", "network issue", "plumbing issue",
];

pub const KEYWORD_LOW: &[&str] = &[
    "slow wifi", "dust", "noise", "dirty", "garbage", "smell", "mosquito", "rats",
    "light flicker", "dirty floor", "cleaning needed", "unhygienic", "maintenance required",
    "bugs", "small leak", "water drip", "minor issue", "rust", "peeling paint", "old wiring",
    "slow drainage",
];
