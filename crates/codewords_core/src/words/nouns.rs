// Hand-curated subset of WordNet headwords, laid out like mkdict output.
// Running mkdict replaces it with the full filtered WordNet 3.1 list.
// Derived from Princeton WordNet https://wordnet.princeton.edu

pub static NOUNS: &[&str] = &[
    "abacus",
    "abbey",
    "acorn",
    "acrobat",
    "adder",
    "admiral",
    "adventure",
    "aerial",
    "agate",
    "airship",
    "albatross",
    "alcove",
    "alder",
    "alley",
    "alloy",
    "almanac",
    "almond",
    "alpaca",
    "altar",
    "amethyst",
    "amulet",
    "anchor",
    "anemone",
    "angler",
    "antelope",
    "anthem",
    "anvil",
    "apple",
    "apricot",
    "aqueduct",
    "arbor",
    "arcade",
    "archer",
    "archway",
    "arena",
    "armada",
    "armchair",
    "arrow",
    "artisan",
    "aspen",
    "asteroid",
    "atlas",
    "atrium",
    "attic",
    "aurora",
    "avalanche",
    "avenue",
    "badger",
    "bagel",
    "bakery",
    "balcony",
    "ballad",
    "balloon",
    "bamboo",
    "banjo",
    "banner",
    "banquet",
    "barge",
    "barley",
    "barn",
    "barrel",
    "basin",
    "basket",
    "bassoon",
    "bastion",
    "beacon",
    "beagle",
    "beaker",
    "beaver",
    "beetle",
    "bellow",
    "beret",
    "berry",
    "biscuit",
    "bison",
    "blanket",
    "blossom",
    "bluff",
    "boat",
    "bobcat",
    "bonfire",
    "bonnet",
    "border",
    "boulder",
    "bouquet",
    "bramble",
    "breeze",
    "brick",
    "bridge",
    "brook",
    "broom",
    "bucket",
    "buffalo",
    "bugle",
    "bulwark",
    "bunker",
    "burrow",
    "butler",
    "butter",
    "button",
    "buzzard",
    "cabin",
    "cactus",
    "camel",
    "camera",
    "canal",
    "canary",
    "candle",
    "canoe",
    "canopy",
    "canyon",
    "caravan",
    "cardinal",
    "carpet",
    "carrot",
    "castle",
    "cavern",
    "cedar",
    "cellar",
    "cello",
    "chalice",
    "chapel",
    "chariot",
    "cheetah",
    "cherry",
    "chestnut",
    "chimney",
    "cinder",
    "citadel",
    "clarinet",
    "clover",
    "cobbler",
    "cobra",
    "cocoa",
    "comet",
    "compass",
    "condor",
    "conduit",
    "copper",
    "coral",
    "cottage",
    "cougar",
    "cove",
    "coyote",
    "crane",
    "crater",
    "crayon",
    "creek",
    "cricket",
    "crystal",
    "cupola",
    "current",
    "cypress",
    "dagger",
    "daisy",
    "dolphin",
    "domino",
    "donkey",
    "dragon",
    "dragonfly",
    "drum",
    "dune",
    "eagle",
    "easel",
    "echo",
    "eclipse",
    "elbow",
    "elephant",
    "ember",
    "engine",
    "falcon",
    "feather",
    "fender",
    "ferret",
    "ferry",
    "fiddle",
    "finch",
    "fjord",
    "flagon",
    "flamingo",
    "flute",
    "forest",
    "fossil",
    "fountain",
    "freighter",
    "galaxy",
    "galleon",
    "garden",
    "garnet",
    "gazelle",
    "geyser",
    "giraffe",
    "glacier",
    "glade",
    "goblet",
    "gondola",
    "gopher",
    "granite",
    "griffin",
    "grotto",
    "guitar",
    "gull",
    "hammock",
    "hamster",
    "harbor",
    "harp",
    "harvest",
    "hazel",
    "hedgehog",
    "helmet",
    "heron",
    "hickory",
    "hillside",
    "hobbit",
    "horizon",
    "hornet",
    "hummingbird",
    "iceberg",
    "igloo",
    "iguana",
    "inkwell",
    "island",
    "ivory",
    "jackal",
    "jaguar",
    "jasmine",
    "jester",
    "jetty",
    "journal",
    "juniper",
    "kayak",
    "kestrel",
    "kettle",
    "kingfisher",
    "kitten",
    "koala",
    "ladder",
    "lagoon",
    "lantern",
    "lark",
    "lattice",
    "lemur",
    "lentil",
    "leopard",
    "lighthouse",
    "lilac",
    "lily",
    "limestone",
    "lobster",
    "locket",
    "locust",
    "lotus",
    "lynx",
    "magnet",
    "magpie",
    "mallard",
    "mandolin",
    "mango",
    "mantis",
    "maple",
    "marble",
    "marsh",
    "marten",
    "meadow",
    "meteor",
    "minnow",
    "mirror",
    "mitten",
    "molecule",
    "monarch",
    "monsoon",
    "moose",
    "mosaic",
    "mountain",
    "mulberry",
    "mustang",
    "nebula",
    "nectar",
    "needle",
    "nightingale",
    "nomad",
    "nutmeg",
    "oasis",
    "ocelot",
    "octopus",
    "olive",
    "orchard",
    "orchid",
    "osprey",
    "otter",
    "owlet",
    "oyster",
    "paddle",
    "pagoda",
    "palace",
    "panda",
    "panther",
    "parrot",
    "pasture",
    "pebble",
    "pelican",
    "penguin",
    "pepper",
    "pheasant",
    "piano",
    "pigeon",
    "pillar",
    "pinecone",
    "pioneer",
    "pirate",
    "planet",
    "platypus",
    "plume",
    "pocket",
    "pollen",
    "pond",
    "poplar",
    "porcupine",
    "portal",
    "potter",
    "prairie",
    "prism",
    "puffin",
    "pumpkin",
    "quail",
    "quarry",
    "quartz",
    "quiver",
    "rabbit",
    "raccoon",
    "radish",
    "rainbow",
    "rampart",
    "raven",
    "reef",
    "reindeer",
    "ribbon",
    "ridge",
    "river",
    "robin",
    "rocket",
    "rooster",
    "saddle",
    "sailor",
    "salmon",
    "sandal",
    "satchel",
    "satellite",
    "scarab",
    "scepter",
    "schooner",
    "scroll",
    "seahorse",
    "sequoia",
    "shadow",
    "shamrock",
    "shelter",
    "shore",
    "sierra",
    "silo",
    "skylark",
    "sloth",
    "sparrow",
    "sphinx",
    "spindle",
    "spruce",
    "squirrel",
    "stallion",
    "starling",
    "statue",
    "summit",
    "sundial",
    "swallow",
    "sycamore",
    "tablet",
    "tadpole",
    "tambourine",
    "tangerine",
    "tapestry",
    "teapot",
    "temple",
    "terrace",
    "thicket",
    "thimble",
    "thistle",
    "thrush",
    "thunder",
    "tiger",
    "timber",
    "toboggan",
    "tortoise",
    "tower",
    "trellis",
    "trumpet",
    "tulip",
    "tundra",
    "turret",
    "turtle",
    "umbrella",
    "unicorn",
    "valley",
    "velvet",
    "violin",
    "volcano",
    "voyager",
    "vulture",
    "wagon",
    "walnut",
    "walrus",
    "warbler",
    "waterfall",
    "weasel",
    "whale",
    "whistle",
    "willow",
    "windmill",
    "wizard",
    "wombat",
    "woodpecker",
    "yacht",
    "zebra",
    "zephyr",
    "zeppelin",
];
