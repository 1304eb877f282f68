// Hand-curated subset of WordNet headwords, laid out like mkdict output.
// Running mkdict replaces it with the full filtered WordNet 3.1 list.
// Derived from Princeton WordNet https://wordnet.princeton.edu

pub static ADJECTIVES: &[&str] = &[
    "abandoned",
    "abiding",
    "ablaze",
    "abloom",
    "aboveboard",
    "abrupt",
    "absent",
    "absolute",
    "absorbent",
    "abstract",
    "abundant",
    "academic",
    "acceptable",
    "accessible",
    "accidental",
    "acclaimed",
    "accurate",
    "acidic",
    "acoustic",
    "active",
    "actual",
    "adamant",
    "adaptable",
    "adept",
    "adequate",
    "adhesive",
    "adjacent",
    "admirable",
    "adorable",
    "adroit",
    "advanced",
    "adventurous",
    "aerial",
    "affable",
    "affluent",
    "afloat",
    "agile",
    "agreeable",
    "airborne",
    "airtight",
    "alert",
    "alkaline",
    "allied",
    "alpine",
    "amber",
    "ambient",
    "ambitious",
    "amiable",
    "ample",
    "amusing",
    "ancient",
    "angelic",
    "angular",
    "animated",
    "annual",
    "antique",
    "anxious",
    "apparent",
    "aquatic",
    "arboreal",
    "arctic",
    "ardent",
    "arid",
    "aromatic",
    "artful",
    "artistic",
    "ashen",
    "assured",
    "astral",
    "astute",
    "athletic",
    "atomic",
    "attentive",
    "auburn",
    "audible",
    "august",
    "auspicious",
    "austere",
    "authentic",
    "autumnal",
    "avid",
    "awake",
    "aware",
    "azure",
    "balmy",
    "bashful",
    "beaming",
    "bearded",
    "benign",
    "bitter",
    "blank",
    "bleak",
    "blissful",
    "blithe",
    "blond",
    "blue",
    "bold",
    "boreal",
    "bouncy",
    "brave",
    "breezy",
    "brief",
    "bright",
    "brilliant",
    "brisk",
    "brittle",
    "bronze",
    "bubbly",
    "bucolic",
    "buoyant",
    "bustling",
    "busy",
    "cagey",
    "calm",
    "candid",
    "capable",
    "carefree",
    "careful",
    "casual",
    "cautious",
    "celestial",
    "certain",
    "cerulean",
    "charming",
    "cheerful",
    "cheery",
    "chief",
    "chilly",
    "chipper",
    "chivalrous",
    "chromatic",
    "chunky",
    "circular",
    "civic",
    "civil",
    "classic",
    "clean",
    "clear",
    "clever",
    "close",
    "cloudy",
    "coastal",
    "cobalt",
    "cogent",
    "coherent",
    "colossal",
    "comely",
    "comfy",
    "comic",
    "compact",
    "complete",
    "concise",
    "constant",
    "content",
    "cordial",
    "cosmic",
    "courtly",
    "covert",
    "cozy",
    "crafty",
    "creamy",
    "crimson",
    "crisp",
    "crucial",
    "crystal",
    "cubic",
    "cunning",
    "curious",
    "curly",
    "cyan",
    "dainty",
    "dapper",
    "daring",
    "dashing",
    "dauntless",
    "dazzling",
    "decent",
    "decisive",
    "deep",
    "deft",
    "delicate",
    "dense",
    "devout",
    "dewy",
    "diligent",
    "direct",
    "discreet",
    "distant",
    "divine",
    "docile",
    "dormant",
    "dreamy",
    "driven",
    "dusky",
    "dutiful",
    "dynamic",
    "eager",
    "earnest",
    "earthy",
    "eastern",
    "easy",
    "eclectic",
    "edible",
    "elastic",
    "elated",
    "electric",
    "elegant",
    "elfin",
    "emerald",
    "eminent",
    "endless",
    "energetic",
    "enormous",
    "epic",
    "equable",
    "equal",
    "erudite",
    "eternal",
    "ethereal",
    "even",
    "exact",
    "exotic",
    "expert",
    "fabled",
    "facile",
    "faithful",
    "famous",
    "fancy",
    "fearless",
    "feathery",
    "feisty",
    "fertile",
    "festive",
    "fiery",
    "final",
    "fine",
    "fiscal",
    "flawless",
    "fleet",
    "fluent",
    "fluffy",
    "fluid",
    "focal",
    "foggy",
    "formal",
    "fragrant",
    "frank",
    "free",
    "fresh",
    "friendly",
    "frisky",
    "frosty",
    "frugal",
    "fruitful",
    "funny",
    "fuzzy",
    "gallant",
    "gaseous",
    "gentle",
    "genuine",
    "giant",
    "gifted",
    "gilded",
    "gleaming",
    "global",
    "glossy",
    "golden",
    "graceful",
    "gracious",
    "grand",
    "granular",
    "grateful",
    "great",
    "green",
    "gritty",
    "grizzled",
    "hallowed",
    "handy",
    "hardy",
    "harmless",
    "hearty",
    "heavenly",
    "helpful",
    "heroic",
    "hidden",
    "hilly",
    "historic",
    "hollow",
    "honest",
    "hopeful",
    "humble",
    "humid",
    "hushed",
    "ideal",
    "idle",
    "immense",
    "immune",
    "indigo",
    "inland",
    "innate",
    "intact",
    "intense",
    "ironic",
    "ivory",
    "jade",
    "jaunty",
    "jolly",
    "jovial",
    "joyful",
    "joyous",
    "judicious",
    "jumbo",
    "junior",
    "keen",
    "kind",
    "kindly",
    "kinetic",
    "knowing",
    "laconic",
    "lavish",
    "lawful",
    "lean",
    "learned",
    "legal",
    "legible",
    "level",
    "light",
    "limber",
    "limpid",
    "liquid",
    "lithe",
    "lively",
    "livid",
    "local",
    "lofty",
    "logical",
    "lone",
    "lonely",
    "long",
    "loud",
    "lovely",
    "loyal",
    "lucid",
    "lucky",
    "luminous",
    "lunar",
    "lush",
    "lyrical",
    "magenta",
    "magic",
    "majestic",
    "major",
    "mammoth",
    "manual",
    "marine",
    "maroon",
    "massive",
    "mature",
    "mellow",
    "melodic",
    "mental",
    "merry",
    "metallic",
    "mighty",
    "mild",
    "mindful",
    "minor",
    "minty",
    "misty",
    "mobile",
    "modern",
    "modest",
    "molten",
    "mossy",
    "motley",
    "mutual",
    "mystic",
    "narrow",
    "native",
    "natural",
    "naval",
    "neat",
    "nectarous",
    "nimble",
    "noble",
    "nocturnal",
    "northern",
    "notable",
    "novel",
    "oaken",
    "obliging",
    "obvious",
    "ocean",
    "olive",
    "opaque",
    "open",
    "optimal",
    "optimistic",
    "orange",
    "orderly",
    "organic",
    "ornate",
    "outer",
    "oval",
    "pacific",
    "palatial",
    "pale",
    "paper",
    "partial",
    "patient",
    "peaceful",
    "pearly",
    "peppy",
    "perfect",
    "pert",
    "pink",
    "placid",
    "plaid",
    "plain",
    "planar",
    "playful",
    "pleasant",
    "plucky",
    "plush",
    "polar",
    "polite",
    "popular",
    "portly",
    "posh",
    "potent",
    "precise",
    "prime",
    "pristine",
    "prompt",
    "proper",
    "proud",
    "prudent",
    "public",
    "pure",
    "purple",
    "quaint",
    "quick",
    "quiet",
    "quirky",
    "radiant",
    "rapid",
    "rare",
    "ready",
    "real",
    "regal",
    "remote",
    "resolute",
    "rich",
    "rigid",
    "ripe",
    "robust",
    "rocky",
    "roomy",
    "rosy",
    "rotund",
    "round",
    "royal",
    "ruby",
    "rugged",
    "rural",
    "russet",
    "rustic",
    "sacred",
    "safe",
    "saintly",
    "salty",
    "sandy",
    "sane",
    "sapphire",
    "savvy",
    "scarlet",
    "scenic",
    "seasonal",
    "secret",
    "secure",
    "serene",
    "shady",
    "sharp",
    "shiny",
    "silent",
    "silken",
    "silky",
    "silver",
    "simple",
    "sincere",
    "sleek",
    "slender",
    "smooth",
    "snowy",
    "snug",
    "sober",
    "social",
    "soft",
    "solar",
    "solemn",
    "solid",
    "sonic",
    "sound",
    "southern",
    "spare",
    "spiffy",
    "spirited",
    "splendid",
    "sporty",
    "spry",
    "square",
    "stable",
    "stately",
    "steady",
    "steep",
    "stellar",
    "sterling",
    "stocky",
    "stoic",
    "stormy",
    "stout",
    "strong",
    "sturdy",
    "subtle",
    "sudden",
    "sunny",
    "super",
    "superb",
    "supple",
    "sure",
    "swift",
    "tactful",
    "tall",
    "tame",
    "tangible",
    "tawny",
    "tender",
    "tepid",
    "terse",
    "thorough",
    "tidal",
    "tidy",
    "timely",
    "tiny",
    "tranquil",
    "tropical",
    "trusty",
    "twilight",
    "umber",
    "unique",
    "upbeat",
    "urban",
    "useful",
    "usual",
    "valiant",
    "valid",
    "vast",
    "velvet",
    "verdant",
    "vernal",
    "vibrant",
    "vigilant",
    "violet",
    "vital",
    "vivid",
    "vocal",
    "volcanic",
    "wary",
    "watery",
    "wavy",
    "wealthy",
    "western",
    "whimsical",
    "whole",
    "wild",
    "willing",
    "windy",
    "winsome",
    "wintry",
    "wired",
    "wise",
    "witty",
    "wooden",
    "woolen",
    "worthy",
    "yellow",
    "young",
    "youthful",
    "zany",
    "zealous",
    "zesty",
];
