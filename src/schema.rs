table! {
    food (id) {
        id -> Integer,
        nom -> Text,
        synonymes -> Nullable<Text>,
        categorie -> Text,
        unite_de_matrice -> Text,
        energie_kilojoules -> Nullable<Integer>,
        energie_calories -> Nullable<Integer>,
        lipides_totaux -> Nullable<Double>,
        acides_gras_satures -> Nullable<Double>,
        acides_gras_mono_insatures -> Nullable<Double>,
        acides_gras_poly_insatures -> Nullable<Double>,
        acide_linoleique -> Nullable<Double>,
        acide_alpha_linolenique -> Nullable<Double>,
        cholesterol -> Nullable<Integer>,
        glucides_disponibles -> Nullable<Double>,
        sucres -> Nullable<Double>,
        amidon -> Nullable<Double>,
        fibres_alimentaires -> Nullable<Double>,
        proteines -> Nullable<Double>,
        sel -> Nullable<Double>,
        alcool -> Nullable<Double>,
        eau -> Nullable<Double>,
        retinol -> Nullable<Integer>,
        betacarotene -> Nullable<Double>,
        vitamine_b1 -> Nullable<Double>,
        vitamine_b2 -> Nullable<Double>,
        vitamine_b6 -> Nullable<Double>,
        vitamine_b12 -> Nullable<Double>,
        niacine -> Nullable<Double>,
        folate -> Nullable<Double>,
        acide_pantothenique -> Nullable<Double>,
        vitamine_c -> Nullable<Double>,
        vitamine_d -> Nullable<Double>,
        vitamine_e -> Nullable<Double>,
        potassium -> Nullable<Double>,
        sodium -> Nullable<Double>,
        chlore -> Nullable<Double>,
        calcium -> Nullable<Double>,
        magnesium -> Nullable<Double>,
        phosphore -> Nullable<Double>,
        fer -> Nullable<Double>,
        iode -> Nullable<Double>,
        zinc -> Nullable<Double>,
        selenium -> Nullable<Double>,
    }
}

table! {
    measures (name) {
        name -> Text,
        unit -> Text,
        conversion -> Double,
    }
}
