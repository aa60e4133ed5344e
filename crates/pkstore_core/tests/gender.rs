use pkstore_core::core_api::{CoreErrorCode, Game};
use pkstore_core::gender::Gender;
use pkstore_core::pokemon::Pokemon;

#[test]
fn displays_names() {
    assert_eq!(Gender::Genderless.to_string(), "Genderless");
    assert_eq!(Gender::Male.as_str(), "Male");
    assert_eq!(Gender::Female.to_string(), "Female");
}

#[test]
fn species_decides_the_default_gender() {
    let pikachu = Pokemon::new("Pikachu", Game::Gold, 10).expect("pikachu");
    assert_eq!(pikachu.gender(), Some(Gender::Male));
    let mew = Pokemon::new("Mew", Game::Gold, 10).expect("mew");
    assert_eq!(mew.gender(), Some(Gender::Genderless));

    let red = Pokemon::new("Pikachu", Game::Red, 10).expect("pikachu");
    assert_eq!(red.gender(), None);
}

#[test]
fn gender_must_match_the_species() {
    let mut pikachu = Pokemon::new("Pikachu", Game::Emerald, 10).expect("pikachu");
    pikachu.set_gender(Gender::Female).expect("female");
    assert_eq!(pikachu.gender(), Some(Gender::Female));
    let err = pikachu
        .set_gender(Gender::Genderless)
        .expect_err("pikachu has a gender");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let mut mew = Pokemon::new("Mew", Game::Emerald, 10).expect("mew");
    let err = mew.set_gender(Gender::Male).expect_err("mew is genderless");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);
}

#[test]
fn trainer_gender_is_male_or_female() {
    let mut crystal = Pokemon::new("Pikachu", Game::Crystal, 10).expect("pikachu");
    assert_eq!(crystal.trainer_gender(), Some(Gender::Male));
    crystal
        .set_trainer_gender(Gender::Female)
        .expect("trainer gender");
    let err = crystal
        .set_trainer_gender(Gender::Genderless)
        .expect_err("trainers have a gender");
    assert_eq!(err.code, CoreErrorCode::InvalidValue);

    let mut gold = Pokemon::new("Pikachu", Game::Gold, 10).expect("pikachu");
    assert_eq!(gold.trainer_gender(), None);
    let err = gold
        .set_trainer_gender(Gender::Female)
        .expect_err("gold has no trainer gender");
    assert_eq!(err.code, CoreErrorCode::Unsupported);
}
