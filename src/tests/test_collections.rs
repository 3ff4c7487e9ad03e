#[cfg(test)]
mod tests {
    use crate::species::Dex;
    use crate::team::Team;
    use crate::teams::Teams;
    use crate::tests::common::{fixture_team, init_logging, TEAM, TEAMS};
    use pretty_assertions::assert_eq;
    use schema::Generation;

    #[test]
    fn test_import_and_export_teams() {
        init_logging();
        let untagged = Teams::import(&TEAMS.replacen("[ou]", "", 1));
        assert_eq!(untagged[0].generation(), Generation::Sm);
        assert_eq!(untagged[0].tier(), None);

        let imported = Teams::import(TEAMS);
        assert_eq!(imported.len(), 2);

        assert_eq!(imported[0].generation(), Generation::Xy);
        assert_eq!(imported[0].tier(), Some("OU"));
        assert_eq!(imported[0].name, "Bulky Offense");
        assert_eq!(imported[0].folder, "");
        assert_eq!(imported[0].len(), 6);

        assert_eq!(imported[1].generation(), Generation::Rby);
        assert_eq!(imported[1].tier(), Some("OU"));
        assert_eq!(imported[1].name, "Cloyster");
        assert_eq!(imported[1].folder, "RBY");
        assert_eq!(imported[1].len(), 6);

        assert_eq!(Teams::export(&imported), TEAMS);
        assert_eq!(Teams::import_team(""), None);
        assert_eq!(Teams::import_team(TEAMS), Some(imported[0].clone()));
    }

    #[test]
    fn test_separator_only_input() {
        assert_eq!(Teams::unpack_team(""), None);
        assert_eq!(Teams::unpack_team("foo"), None);
        assert_eq!(Teams::import("|\n\n\n"), Vec::<Team>::new());
    }

    #[test]
    fn test_header_tag_precedence() {
        let teams = Teams::import(TEAMS);
        let cloyster = teams[1].pack_sets();

        let bare = Teams::unpack_team(&format!("ou]RBY/Cloyster|{cloyster}")).expect("bare");
        assert_eq!(bare.generation(), Generation::Xy);
        assert_eq!(bare.tier(), Some("OU"));
        assert_eq!(bare.folder, "RBY");
        assert_eq!(bare.name, "Cloyster");

        let tagged = Teams::unpack_team(&format!("gen1ou]RBY/Cloyster|{cloyster}")).expect("tagged");
        assert_eq!(tagged.generation(), Generation::Rby);
        assert_eq!(tagged.tier(), Some("OU"));
        assert_eq!(tagged.folder, "RBY");
        assert_eq!(tagged.name, "Cloyster");
        assert_eq!(tagged, teams[1]);
    }

    #[test]
    fn test_mixed_document() {
        let teams = Teams::import(TEAMS);
        let team = fixture_team();
        let mixed = |tag: &str| {
            format!(
                "{tag}]RBY/Cloyster|{}\n{}|{}",
                teams[1].pack_sets(),
                Teams::export(&teams[..1]),
                team.pack()
            )
        };

        let imported = Teams::import(&mixed("ou"));
        assert_eq!(imported[0].generation(), Generation::Xy);

        let imported = Teams::import(&mixed("gen1ou"));
        assert_eq!(imported.len(), 3);
        assert!(imported.iter().all(|team| team.len() == 6));

        assert_eq!(imported[0].generation(), Generation::Rby);
        assert_eq!(imported[0].tier(), Some("OU"));
        assert_eq!(imported[0].name, "Cloyster");
        assert_eq!(imported[0].folder, "RBY");

        assert_eq!(imported[1].generation(), Generation::Xy);
        assert_eq!(imported[1].name, "Bulky Offense");

        assert_eq!(imported[2].generation(), Generation::CURRENT);
        assert_eq!(imported[2].to_text(), TEAM);

        let again = Teams::import(&team.pack());
        assert_eq!(again[0].to_text(), TEAM);
    }

    #[test]
    fn test_packed_document_round_trip() {
        let imported = Teams::import(TEAMS);
        let packed = Teams::pack(&imported);
        assert_eq!(packed.lines().count(), 2);
        assert!(packed.starts_with("ou]Bulky Offense|Lando|Landorus-Therian|"));
        assert_eq!(Teams::import(&packed), imported);
    }

    #[test]
    fn test_bundled_dex_knows_every_fixture_species() {
        let dex = Dex::bundled();
        for team in Teams::import(TEAMS) {
            for set in &team.sets {
                assert!(
                    dex.species(&set.species, team.generation()).is_some(),
                    "{} is missing from gen {}",
                    set.species,
                    team.generation()
                );
            }
        }
        assert_eq!(Teams::import_with(TEAMS, Some(dex)), Teams::import(TEAMS));
    }
}
