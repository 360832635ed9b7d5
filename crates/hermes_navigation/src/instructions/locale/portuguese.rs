use super::{Messages, ModifierWords, Phrasebook, Templates};

pub static BRAZILIAN_PORTUGUESE: Phrasebook = Phrasebook {
    locale_tag: "pt-BR",
    modifiers: ModifierWords {
        uturn: "retorno",
        sharp_right: "acentuadamente à direita",
        right: "à direita",
        slight_right: "levemente à direita",
        straight: "em frente",
        slight_left: "levemente à esquerda",
        left: "à esquerda",
        sharp_left: "acentuadamente à esquerda",
    },
    left_side: "à esquerda",
    right_side: "à direita",
    directions: [
        "norte", "nordeste", "leste", "sudeste", "sul", "sudoeste", "oeste", "noroeste",
    ],
    ordinal,
    templates: Templates {
        head: "Siga para o {direction}",
        depart: "Comece o percurso",
        arrive: "Você chegou ao seu destino",
        arrive_side: "Você chegou ao seu destino, {side}",
        turn: "Vire {modifier}",
        go_straight: "Siga em frente",
        u_turn: "Faça o retorno",
        continue_ahead: "Continue",
        continue_modifier: "Continue {modifier}",
        merge: "Entre na via",
        merge_modifier: "Entre na via {modifier}",
        ramp: "Pegue a rampa",
        ramp_side: "Pegue a rampa {side}",
        exit: "Pegue a saída",
        exit_side: "Pegue a saída {side}",
        fork_side: "Mantenha-se {side} na bifurcação",
        fork_straight: "Siga em frente na bifurcação",
        end_of_road: "Vire {modifier} no fim da via",
        roundabout: "Entre na rotatória",
        roundabout_exit: "Entre na rotatória e pegue a {ordinal} saída",
        exit_roundabout: "Saia da rotatória",
        on_road: "{instruction} em {road}",
        onto_road: "{instruction} em {road}",
    },
    messages: Messages {
        permission_denied: "Não foi possível obter sua localização. O acesso à localização foi negado. Verifique as permissões do navegador.",
        position_unavailable: "Não foi possível obter sua localização. As informações de localização não estão disponíveis.",
        position_timed_out: "Não foi possível obter sua localização. A solicitação de localização expirou. Tente novamente.",
        unsupported: "Seu navegador não suporta geolocalização ou o recurso está desativado.",
        network_unreachable: "Não foi possível conectar ao servidor de rotas. Verifique sua conexão com a internet.",
        no_route_found: "Não foi possível encontrar uma rota entre os pontos selecionados.",
        server_error: "Ocorreu um erro no servidor de rotas. Tente novamente mais tarde.",
        routing_unknown: "Não foi possível calcular a rota. Verifique sua conexão e tente novamente.",
        low_accuracy: "Sua localização está com baixa precisão (cerca de {accuracy}m). A rota calculada pode não ser precisa.",
        no_instructions: "Nenhuma instrução disponível.",
        instruction_unavailable: "Instrução indisponível",
    },
};

fn ordinal(n: u32) -> String {
    format!("{n}ª")
}
