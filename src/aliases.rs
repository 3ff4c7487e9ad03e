use phf::phf_map;
use schema::ID;

// Community shorthand -> display name. Keys are IDs.
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "zard" => "Charizard",
    "zardx" => "Charizard-Mega-X",
    "zardy" => "Charizard-Mega-Y",
    "megazardx" => "Charizard-Mega-X",
    "megazardy" => "Charizard-Mega-Y",
    "megacharizardx" => "Charizard-Mega-X",
    "megacharizardy" => "Charizard-Mega-Y",
    "zam" => "Alakazam",
    "gar" => "Gengar",
    "eggy" => "Exeggutor",
    "lax" => "Snorlax",
    "mime" => "Mr. Mime",
    "nidoranfemale" => "Nidoran-F",
    "nidoranmale" => "Nidoran-M",
    "azu" => "Azumarill",
    "ttar" => "Tyranitar",
    "mence" => "Salamence",
    "meta" => "Metagross",
    "chomp" => "Garchomp",
    "tran" => "Heatran",
    "rotomw" => "Rotom-Wash",
    "washrotom" => "Rotom-Wash",
    "ferro" => "Ferrothorn",
    "lando" => "Landorus",
    "landot" => "Landorus-Therian",
    "landorust" => "Landorus-Therian",
    "koko" => "Tapu Koko",
    "mimi" => "Mimikyu",
    "lycanrocmidday" => "Lycanroc",
};

/// Look up the display name an ID is shorthand for.
pub fn get(id: &ID) -> Option<&'static str> {
    ALIASES.get(id.as_str()).copied()
}
